//! Seasonal theme
//!
//! The run starts in summer and turns to fall once at a score threshold. The
//! season never produces pixels: it picks palette colors and symbolic asset
//! keys for the renderer.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::{Obstacle, ObstacleKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Summer,
    Fall,
}

impl Season {
    /// Turn summer into fall once `score` reaches `threshold`.
    /// Returns true only on the tick the season changes.
    pub fn advance(&mut self, score: u32, threshold: u32) -> bool {
        if *self == Season::Summer && score >= threshold {
            *self = Season::Fall;
            true
        } else {
            false
        }
    }

    pub fn flower_asset(self) -> AssetKey {
        match self {
            Season::Summer => AssetKey::Flower,
            Season::Fall => AssetKey::FallFlower,
        }
    }

    /// Asset and draw box for an obstacle.
    ///
    /// Summer obstacles are drawn inside their collision box. Fall art is
    /// larger than the box and offset upward so it sits on the ground.
    pub fn obstacle_art(self, obstacle: &Obstacle) -> (AssetKey, Rect) {
        let r = obstacle.rect;
        match (self, obstacle.kind) {
            (Season::Summer, ObstacleKind::Rock) => (AssetKey::Rock, r),
            (Season::Summer, ObstacleKind::Tree) => (AssetKey::Tree, r),
            (Season::Fall, ObstacleKind::Rock) => {
                (AssetKey::FallRock, Rect::new(r.x, r.y - 20, 50, 50))
            }
            (Season::Fall, ObstacleKind::Tree) => {
                (AssetKey::FallTree, Rect::new(r.x, r.y - 10, 70, 90))
            }
        }
    }
}

/// Symbolic art identifiers requested from the asset provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKey {
    PlayerJump,
    PlayerRun1,
    PlayerRun2,
    PlayerDead,
    Flower,
    FallFlower,
    Rock,
    Tree,
    FallRock,
    FallTree,
}

impl AssetKey {
    pub const ALL: [AssetKey; 10] = [
        AssetKey::PlayerJump,
        AssetKey::PlayerRun1,
        AssetKey::PlayerRun2,
        AssetKey::PlayerDead,
        AssetKey::Flower,
        AssetKey::FallFlower,
        AssetKey::Rock,
        AssetKey::Tree,
        AssetKey::FallRock,
        AssetKey::FallTree,
    ];

    /// Summer obstacles have no image; the renderer draws them from primitives
    pub fn is_procedural(self) -> bool {
        matches!(self, AssetKey::Rock | AssetKey::Tree)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AssetKey::PlayerJump => "player_jump",
            AssetKey::PlayerRun1 => "player_run1",
            AssetKey::PlayerRun2 => "player_run2",
            AssetKey::PlayerDead => "player_dead",
            AssetKey::Flower => "flower",
            AssetKey::FallFlower => "fall_flower",
            AssetKey::Rock => "rock",
            AssetKey::Tree => "tree",
            AssetKey::FallRock => "fall_rock",
            AssetKey::FallTree => "fall_tree",
        }
    }
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalized RGBA for GPU consumers
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

/// Summer and fall endpoints of each themed surface
pub mod colors {
    use super::Rgb;

    pub const SKY_SUMMER: Rgb = Rgb::new(0, 255, 255);
    pub const SKY_FALL: Rgb = Rgb::new(204, 234, 215);
    pub const GROUND_SUMMER: Rgb = Rgb::new(0, 255, 0);
    pub const GROUND_FALL: Rgb = Rgb::new(135, 114, 0);
    pub const FOLIAGE_SUMMER: Rgb = Rgb::new(0, 255, 0);
    pub const FOLIAGE_FALL: Rgb = Rgb::new(165, 42, 42);
    pub const TRUNK: Rgb = Rgb::new(102, 51, 0);
}

/// Blend `start` to `end` by score over `[min_score, max_score]`.
///
/// Below the window yields `start`, above it `end`; inside, each channel is
/// mixed linearly and truncated.
pub fn interpolate_color(start: Rgb, end: Rgb, score: u32, min_score: u32, max_score: u32) -> Rgb {
    if score < min_score {
        return start;
    }
    if score > max_score {
        return end;
    }
    let t = (score - min_score) as f32 / (max_score - min_score) as f32;
    let mix = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t) as u8;
    Rgb::new(mix(start.r, end.r), mix(start.g, end.g), mix(start.b, end.b))
}

/// Colors of the scene for the current score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub sky: Rgb,
    pub ground: Rgb,
    pub foliage: Rgb,
    pub trunk: Rgb,
}

impl Palette {
    pub fn for_score(score: u32, min_score: u32, max_score: u32) -> Self {
        Self {
            sky: interpolate_color(
                colors::SKY_SUMMER,
                colors::SKY_FALL,
                score,
                min_score,
                max_score,
            ),
            ground: interpolate_color(
                colors::GROUND_SUMMER,
                colors::GROUND_FALL,
                score,
                min_score,
                max_score,
            ),
            foliage: interpolate_color(
                colors::FOLIAGE_SUMMER,
                colors::FOLIAGE_FALL,
                score,
                min_score,
                max_score,
            ),
            trunk: colors::TRUNK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_turns_once() {
        let mut season = Season::Summer;
        assert!(!season.advance(90, 100));
        assert_eq!(season, Season::Summer);
        assert!(season.advance(100, 100));
        assert_eq!(season, Season::Fall);
        assert!(!season.advance(200, 100));
        // Never reverses, even if asked with a lower score
        assert!(!season.advance(0, 100));
        assert_eq!(season, Season::Fall);
    }

    #[test]
    fn test_interpolate_outside_window() {
        let start = Rgb::new(0, 0, 0);
        let end = Rgb::new(200, 100, 50);
        assert_eq!(interpolate_color(start, end, 10, 50, 100), start);
        assert_eq!(interpolate_color(start, end, 150, 50, 100), end);
        assert_eq!(interpolate_color(start, end, 50, 50, 100), start);
        assert_eq!(interpolate_color(start, end, 100, 50, 100), end);
    }

    #[test]
    fn test_interpolate_midpoint() {
        let sky = interpolate_color(colors::SKY_SUMMER, colors::SKY_FALL, 75, 50, 100);
        assert_eq!(sky, Rgb::new(102, 244, 235));
    }

    #[test]
    fn test_palette_for_score() {
        let summer = Palette::for_score(0, 50, 100);
        assert_eq!(summer.sky, colors::SKY_SUMMER);
        assert_eq!(summer.foliage, colors::FOLIAGE_SUMMER);
        let fall = Palette::for_score(300, 50, 100);
        assert_eq!(fall.ground, colors::GROUND_FALL);
        assert_eq!(fall.foliage, colors::FOLIAGE_FALL);
    }

    #[test]
    fn test_asset_selection_follows_season() {
        assert_eq!(Season::Summer.flower_asset(), AssetKey::Flower);
        assert_eq!(Season::Fall.flower_asset(), AssetKey::FallFlower);

        let rock = Obstacle::new(1, ObstacleKind::Rock, 400);
        assert_eq!(Season::Summer.obstacle_art(&rock), (AssetKey::Rock, rock.rect));
        let (key, rect) = Season::Fall.obstacle_art(&rock);
        assert_eq!(key, AssetKey::FallRock);
        assert_eq!(rect, Rect::new(400, rock.rect.y - 20, 50, 50));
    }

    #[test]
    fn test_asset_key_names_match_serde() {
        for key in AssetKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
    }
}
