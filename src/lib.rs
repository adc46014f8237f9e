//! Bloom Dash - a side-scrolling flower collecting runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, seasons)
//! - `game`: Fixed timestep driver tying input, spawner and simulation together
//! - `renderer`: Frame data and the traits an external renderer implements
//! - `input`: Logical input events decoupled from key codes
//! - `settings`: Named tunables, loadable from JSON

pub mod error;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::SettingsError;
pub use game::{Game, RunSummary};
pub use input::{InputEvent, InputQueue};
pub use settings::Settings;

use glam::IVec2;

/// Fixed screen geometry. Tunables live in [`Settings`].
pub mod consts {
    /// Playfield dimensions; obstacles spawn just past the right edge
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 400;
    /// Top of the ground band renderers fill below the sky
    pub const GROUND_TOP: i32 = 300;

    /// Player resting y (top edge of the player box)
    pub const GROUND_LEVEL: i32 = 250;
    /// Player never moves horizontally
    pub const PLAYER_X: i32 = 50;
    /// Player collision box is square
    pub const PLAYER_SIZE: i32 = 50;

    /// Entities are evicted once their right edge reaches this x
    pub const LEFT_BOUNDARY: i32 = 0;

    /// Rock box, sitting 30 below ground level
    pub const ROCK_WIDTH: i32 = 30;
    pub const ROCK_HEIGHT: i32 = 30;
    pub const ROCK_Y_OFFSET: i32 = 30;

    /// Tree box, poking 20 above ground level
    pub const TREE_WIDTH: i32 = 30;
    pub const TREE_HEIGHT: i32 = 40;
    pub const TREE_Y_OFFSET: i32 = -20;

    pub const FLOWER_SIZE: i32 = 20;
}

/// Euclidean distance between two integer points
#[inline]
pub fn point_distance(a: IVec2, b: IVec2) -> f32 {
    a.as_vec2().distance(b.as_vec2())
}
