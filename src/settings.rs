//! Game settings
//!
//! Every tunable of the run lives here as a named parameter. Screen geometry
//! that never changes is in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::SCREEN_WIDTH;
use crate::error::SettingsError;

/// Largest spawn position or per-tick distance accepted, keeping entity
/// coordinates far from `i32` overflow
pub const MAX_COORDINATE: i32 = 1 << 20;

/// Game tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Timing ===
    /// Main loop period (20 ms = 50 ticks/second)
    pub tick_ms: u32,
    /// Maximum ticks run per host frame to prevent spiral of death
    pub max_substeps: u32,
    /// Obstacle spawner period
    pub obstacle_interval_ms: u32,
    /// Flower spawner period
    pub flower_interval_ms: u32,

    // === Entity store ===
    pub max_obstacles: usize,
    pub max_flowers: usize,

    // === Physics (units per tick) ===
    /// Velocity set on jump (negative is up)
    pub jump_impulse: i32,
    /// Velocity added each airborne tick
    pub gravity: i32,
    /// Leftward movement of every entity per tick
    pub scroll_speed: i32,

    // === Spawning ===
    pub obstacle_spawn_x: i32,
    /// Flowers spawn at `flower_spawn_x + [0, flower_spawn_spread)`
    pub flower_spawn_x: i32,
    pub flower_spawn_spread: i32,
    /// Minimum distance between a new flower and any obstacle
    pub flower_min_distance: f32,
    /// Placement candidates tried before skipping the spawn
    pub flower_max_attempts: u32,

    // === Scoring and season ===
    pub flower_score: u32,
    /// Score at which summer turns to fall
    pub season_threshold: u32,
    /// Palette blends from summer to fall colors across this score window
    pub palette_min_score: u32,
    pub palette_max_score: u32,

    // === Presentation ===
    /// Grounded ticks between run frame swaps
    pub run_animation_ticks: u32,
    /// Autopilot jumps when an obstacle is this close to the player
    pub autopilot_lookahead: i32,

    /// Spawner RNG seed
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: 20,
            max_substeps: 8,
            obstacle_interval_ms: 1500,
            flower_interval_ms: 1500,

            max_obstacles: 10,
            max_flowers: 5,

            jump_impulse: -15,
            gravity: 1,
            scroll_speed: 10,

            obstacle_spawn_x: SCREEN_WIDTH,
            flower_spawn_x: SCREEN_WIDTH + 100,
            flower_spawn_spread: 300,
            flower_min_distance: 150.0,
            flower_max_attempts: 16,

            flower_score: 10,
            season_threshold: 100,
            palette_min_score: 50,
            palette_max_score: 100,

            run_animation_ticks: 10,
            autopilot_lookahead: 60,

            seed: 0x0B10_0D45,
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.tick_ms == 0 {
            return Err(SettingsError::ZeroTickInterval);
        }
        if self.max_substeps == 0 {
            return Err(SettingsError::ZeroSubsteps);
        }
        if self.tick_ms.checked_mul(self.max_substeps).is_none() {
            return Err(SettingsError::TimestepOverflow {
                tick_ms: self.tick_ms,
                max_substeps: self.max_substeps,
            });
        }
        if self.obstacle_interval_ms == 0 {
            return Err(SettingsError::ZeroSpawnInterval { which: "obstacle" });
        }
        if self.flower_interval_ms == 0 {
            return Err(SettingsError::ZeroSpawnInterval { which: "flower" });
        }
        let longest_interval = u32::MAX - self.tick_ms;
        if self.obstacle_interval_ms > longest_interval {
            return Err(SettingsError::IntervalTooLong {
                which: "obstacle",
                interval_ms: self.obstacle_interval_ms,
            });
        }
        if self.flower_interval_ms > longest_interval {
            return Err(SettingsError::IntervalTooLong {
                which: "flower",
                interval_ms: self.flower_interval_ms,
            });
        }
        if self.max_obstacles == 0 {
            return Err(SettingsError::ZeroCapacity { which: "obstacle" });
        }
        if self.max_flowers == 0 {
            return Err(SettingsError::ZeroCapacity { which: "flower" });
        }
        if self.scroll_speed <= 0 {
            return Err(SettingsError::NonPositiveScrollSpeed {
                speed: self.scroll_speed,
            });
        }
        if self.jump_impulse >= 0 {
            return Err(SettingsError::NonNegativeJumpImpulse {
                impulse: self.jump_impulse,
            });
        }
        if self.gravity <= 0 {
            return Err(SettingsError::NonPositiveGravity {
                gravity: self.gravity,
            });
        }
        if self.flower_spawn_spread <= 0 {
            return Err(SettingsError::NonPositiveFlowerSpread {
                spread: self.flower_spawn_spread,
            });
        }
        for (which, value) in [
            ("scroll speed", self.scroll_speed),
            ("obstacle spawn x", self.obstacle_spawn_x),
            ("flower spawn x", self.flower_spawn_x),
            ("flower spawn spread", self.flower_spawn_spread),
        ] {
            if !(-MAX_COORDINATE..=MAX_COORDINATE).contains(&value) {
                return Err(SettingsError::CoordinateOutOfRange { which, value });
            }
        }
        if !self.flower_min_distance.is_finite() || self.flower_min_distance < 0.0 {
            return Err(SettingsError::InvalidFlowerDistance {
                distance: self.flower_min_distance,
            });
        }
        if self.flower_max_attempts == 0 {
            return Err(SettingsError::ZeroFlowerAttempts);
        }
        if self.run_animation_ticks == 0 {
            return Err(SettingsError::ZeroAnimationTicks);
        }
        if self.palette_min_score >= self.palette_max_score {
            return Err(SettingsError::InvertedPaletteWindow {
                min: self.palette_min_score,
                max: self.palette_max_score,
            });
        }
        Ok(())
    }
}
