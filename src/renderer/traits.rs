//! Contracts for the host's drawing and asset layers

use super::instance::FrameData;
use crate::sim::AssetKey;

/// Draws a complete frame. Implemented by the host (GPU, canvas, terminal...).
pub trait Renderer {
    /// Backend identifier, for logs
    fn backend(&self) -> &'static str;

    fn draw(&mut self, frame: &FrameData);
}

/// Resolves symbolic asset keys to drawable images.
///
/// A missing image is not an error: the frame builder simply leaves that
/// entity out.
pub trait AssetProvider {
    type Image;

    fn image(&self, key: AssetKey) -> Option<&Self::Image>;

    fn contains(&self, key: AssetKey) -> bool {
        self.image(key).is_some()
    }
}
