//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (owned by the spawner)
//! - Stable iteration order (oldest entity first)
//! - No rendering or platform dependencies

pub mod animation;
pub mod collision;
pub mod season;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod time;

pub use animation::{PlayerAnimation, PlayerFrame};
pub use collision::{Rect, Sweep, sweep};
pub use season::{AssetKey, Palette, Rgb, Season, interpolate_color};
pub use spawner::Spawner;
pub use state::{
    EntityStore, Flower, GameEvent, GamePhase, GameState, Obstacle, ObstacleKind, Player,
};
pub use tick::{TickInput, tick};
pub use time::{FixedTimestep, IntervalTimer};
