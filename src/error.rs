//! Configuration errors
//!
//! The simulation itself never fails; only loading and validating settings can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read settings file")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("failed to parse settings JSON")]
    Json {
        #[from]
        source: serde_json::Error,
    },
    #[error("screen size must be positive, got {width}x{height}")]
    InvalidScreen { width: f32, height: f32 },
    #[error("insets ({top} + {bottom}) leave no playable height in a {height}px screen")]
    InsetsTooLarge { top: f32, bottom: f32, height: f32 },
    #[error("gravity must be positive, got {0}")]
    InvalidGravity(f32),
    #[error("jump force must be negative (upward), got {0}")]
    InvalidJumpForce(f32),
    #[error("{name} is out of range, got {value}")]
    InvalidDuration { name: &'static str, value: f32 },
}
