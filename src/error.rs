//! Configuration error types.
//!
//! Every precondition the swarm relies on is checked once, when a
//! [`crate::config::GameConfig`] is validated.  A bad value is reported,
//! never clamped.

use std::fmt;

/// Top-level error enum for loading and validating configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The config file could not be read.
    Io {
        path: String,
        message: String,
    },

    /// The config file was read but is not valid TOML for [`crate::config::GameConfig`].
    Parse {
        path: String,
        message: String,
    },

    /// A count or size that must be strictly positive was zero (or negative).
    ZeroDimension {
        /// Name of the offending key.
        name: &'static str,
    },

    /// A tunable is outside its accepted range.
    OutOfRange {
        name: &'static str,
        value: f64,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },

    /// The formation's lowest row starts at or below the arena floor.
    GridTooTall {
        grid_bottom: f32,
        arena_height: f32,
    },

    /// The formation does not fit between the arena's gutters.
    GridTooWide {
        grid_width: f32,
        arena_width: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => {
                write!(f, "could not read config '{}': {}", path, message)
            }
            ConfigError::Parse { path, message } => {
                write!(f, "invalid config '{}': {}", path, message)
            }
            ConfigError::ZeroDimension { name } => {
                write!(f, "'{}' must be greater than zero", name)
            }
            ConfigError::OutOfRange {
                name,
                value,
                expected,
            } => write!(f, "'{}' = {} is outside accepted range {}", name, value, expected),
            ConfigError::GridTooTall {
                grid_bottom,
                arena_height,
            } => write!(
                f,
                "formation reaches down to {} but the arena floor is at {}",
                grid_bottom, arena_height
            ),
            ConfigError::GridTooWide {
                grid_width,
                arena_width,
            } => write!(
                f,
                "formation is {} wide but the arena only has {} between its gutters",
                grid_width, arena_width
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Convenience alias: a `Result` using `ConfigError` as the error type.
pub type ConfigResult<T> = Result<T, ConfigError>;
