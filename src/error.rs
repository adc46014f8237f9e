//! Configuration errors
//!
//! The simulation itself never fails; gameplay outcomes are events. The only
//! thing rejected is a malformed [`Settings`](crate::Settings), at construction.

use std::fmt;

use crate::settings::MAX_COORDINATE;

#[derive(Debug)]
pub enum SettingsError {
    ZeroTickInterval,
    ZeroSubsteps,
    TimestepOverflow { tick_ms: u32, max_substeps: u32 },
    ZeroSpawnInterval { which: &'static str },
    IntervalTooLong { which: &'static str, interval_ms: u32 },
    ZeroCapacity { which: &'static str },
    NonPositiveScrollSpeed { speed: i32 },
    NonNegativeJumpImpulse { impulse: i32 },
    NonPositiveGravity { gravity: i32 },
    NonPositiveFlowerSpread { spread: i32 },
    CoordinateOutOfRange { which: &'static str, value: i32 },
    InvalidFlowerDistance { distance: f32 },
    ZeroFlowerAttempts,
    ZeroAnimationTicks,
    InvertedPaletteWindow { min: u32, max: u32 },
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTickInterval => write!(f, "tick interval must be at least 1 ms"),
            Self::ZeroSubsteps => write!(f, "max substeps must be at least 1"),
            Self::TimestepOverflow {
                tick_ms,
                max_substeps,
            } => write!(
                f,
                "tick interval {tick_ms} ms times {max_substeps} substeps overflows"
            ),
            Self::ZeroSpawnInterval { which } => {
                write!(f, "{which} spawn interval must be at least 1 ms")
            }
            Self::IntervalTooLong { which, interval_ms } => {
                write!(f, "{which} spawn interval of {interval_ms} ms is too long")
            }
            Self::ZeroCapacity { which } => write!(f, "{which} capacity must be at least 1"),
            Self::NonPositiveScrollSpeed { speed } => {
                write!(f, "scroll speed must be positive, got {speed}")
            }
            Self::NonNegativeJumpImpulse { impulse } => {
                write!(f, "jump impulse must be negative (upward), got {impulse}")
            }
            Self::NonPositiveGravity { gravity } => {
                write!(f, "gravity must be positive, got {gravity}")
            }
            Self::NonPositiveFlowerSpread { spread } => {
                write!(f, "flower spawn spread must be positive, got {spread}")
            }
            Self::CoordinateOutOfRange { which, value } => {
                write!(f, "{which} must be within +/-{MAX_COORDINATE}, got {value}")
            }
            Self::InvalidFlowerDistance { distance } => {
                write!(f, "flower minimum distance must be finite and >= 0, got {distance}")
            }
            Self::ZeroFlowerAttempts => write!(f, "flower placement needs at least 1 attempt"),
            Self::ZeroAnimationTicks => write!(f, "run animation rate must be at least 1 tick"),
            Self::InvertedPaletteWindow { min, max } => {
                write!(f, "palette window is empty: min={min}, max={max}")
            }
            Self::Io(err) => write!(f, "failed to read settings: {err}"),
            Self::Parse(err) => write!(f, "failed to parse settings: {err}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}
