//! Collision detection and scoring sweep
//!
//! Everything is an axis-aligned box in screen space (y grows downward).

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::state::{EntityStore, ObstacleKind};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Top-left corner
    pub fn origin(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Strict overlap: boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Result of sweeping the entity store against the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sweep {
    /// First obstacle (oldest first) overlapping the player
    pub lethal: Option<ObstacleKind>,
    /// Flowers removed this sweep
    pub collected: u32,
}

/// Check the player box against every entity.
///
/// Obstacles are checked first. A lethal hit ends the sweep before any flower
/// is touched, so a dying tick never scores. Otherwise every overlapping
/// flower is removed and counted.
pub fn sweep(player: &Rect, store: &mut EntityStore) -> Sweep {
    if let Some(obstacle) = store.obstacles().iter().find(|o| o.rect.intersects(player)) {
        return Sweep {
            lethal: Some(obstacle.kind),
            collected: 0,
        };
    }

    let mut collected = 0;
    store.retain_flowers(|flower| {
        let hit = flower.rect.intersects(player);
        if hit {
            collected += 1;
        }
        !hit
    });

    Sweep {
        lethal: None,
        collected,
    }
}
