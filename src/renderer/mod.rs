//! Rendering interface
//!
//! The core never draws. Each frame it builds a flat list of sprite instances
//! plus the season palette and hands it to whatever [`Renderer`] the host
//! provides.

pub mod assets;
pub mod instance;
pub mod traits;

pub use assets::{AssetManifest, SpriteEntry};
pub use instance::{FrameData, SpriteInstance};
pub use traits::{AssetProvider, Renderer};
