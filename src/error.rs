//! Configuration errors
//!
//! The simulation itself has no failure modes once running. Everything that can
//! go wrong is caught when a [`GameConfig`](crate::GameConfig) is validated, so a
//! run never starts from degenerate state.

use std::fmt;

/// Reasons a configuration is rejected
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The squad must start with at least one unit.
    NoUnits,

    /// A value that must be strictly positive (radii, projectile speed, ...).
    NonPositive {
        /// Field name (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
    },

    /// A value that may be zero but not negative (delays, movement speeds).
    Negative {
        name: &'static str,
        value: f32,
    },

    /// NaN or infinity in any numeric field.
    NonFinite { name: &'static str },

    /// The playfield cannot fit the squad-center clamp or the spawn margins.
    PlayfieldTooSmall { width: f32, height: f32 },

    /// JSON configuration could not be parsed.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoUnits => write!(f, "unit count must be at least 1"),
            ConfigError::NonPositive { name, value } => {
                write!(f, "'{}' = {} must be greater than zero", name, value)
            }
            ConfigError::Negative { name, value } => {
                write!(f, "'{}' = {} must not be negative", name, value)
            }
            ConfigError::NonFinite { name } => write!(f, "'{}' is not a finite number", name),
            ConfigError::PlayfieldTooSmall { width, height } => write!(
                f,
                "playfield {}x{} is too small for its movement and spawn margins",
                width, height
            ),
            ConfigError::Parse(msg) => write!(f, "invalid configuration JSON: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Convenience alias: a `Result` using `ConfigError` as the error type.
pub type ConfigResult<T> = Result<T, ConfigError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Rejects NaN, infinities and values `<= 0`.
pub fn require_positive(name: &'static str, value: f32) -> ConfigResult<()> {
    require_finite(name, value)?;
    if value <= 0.0 {
        Err(ConfigError::NonPositive { name, value })
    } else {
        Ok(())
    }
}

/// Rejects NaN, infinities and values `< 0`.
pub fn require_non_negative(name: &'static str, value: f32) -> ConfigResult<()> {
    require_finite(name, value)?;
    if value < 0.0 {
        Err(ConfigError::Negative { name, value })
    } else {
        Ok(())
    }
}

fn require_finite(name: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name })
    }
}
