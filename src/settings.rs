//! Game settings
//!
//! Screen geometry and physics tuning. Supplied once when a [`crate::Game`] is
//! created and never re-read during play.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Host platform, which shifts where the obstacle gap may sit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    #[default]
    Other,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Android => "Android",
            Platform::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ios" => Some(Platform::Ios),
            "android" => Some(Platform::Android),
            "other" | "web" | "default" => Some(Platform::Other),
            _ => None,
        }
    }

    /// How far the obstacle pair may be pulled from its extreme positions
    pub fn min_offset(&self, insets: Insets) -> f32 {
        match self {
            Platform::Android => 150.0 + insets.bottom,
            Platform::Ios | Platform::Other => 230.0 - (insets.top + insets.bottom),
        }
    }

    /// Vertical offset applied to the obstacle resting positions
    pub fn top_offset(&self, insets: Insets) -> f32 {
        match self {
            Platform::Android => 150.0 + insets.top,
            Platform::Ios | Platform::Other => 200.0,
        }
    }
}

/// Safe-area insets (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    pub top: f32,
    pub bottom: f32,
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    pub insets: Insets,
    pub platform: Platform,

    // === Physics ===
    /// Downward acceleration (pixels/s²)
    pub gravity: f32,
    /// Velocity applied by a tap (negative = up)
    pub jump_force: f32,

    // === Timing ===
    /// Seconds between a restart and the first obstacle scroll
    pub restart_delay: f32,
    /// Frame deltas above this are clamped before integration
    pub max_frame_dt: f32,

    /// Seed for gap generation
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 390.0,
            screen_height: 844.0,
            insets: Insets {
                top: 47.0,
                bottom: 34.0,
            },
            platform: Platform::Other,

            gravity: GRAVITY,
            jump_force: JUMP_FORCE,

            restart_delay: RESTART_DELAY,
            max_frame_dt: MAX_FRAME_DT,

            seed: 0x5EED,
        }
    }
}

impl Settings {
    /// Settings for a given screen, everything else default
    pub fn for_screen(width: f32, height: f32, insets: Insets, platform: Platform) -> Self {
        Self {
            screen_width: width,
            screen_height: height,
            insets,
            platform,
            ..Self::default()
        }
    }

    /// Reject geometry and tuning the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (w, h) = (self.screen_width, self.screen_height);
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(ConfigError::InvalidScreen {
                width: w,
                height: h,
            });
        }
        let Insets { top, bottom } = self.insets;
        if top < 0.0 || bottom < 0.0 || top + bottom >= h {
            return Err(ConfigError::InsetsTooLarge {
                top,
                bottom,
                height: h,
            });
        }
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(ConfigError::InvalidGravity(self.gravity));
        }
        if !(self.jump_force.is_finite() && self.jump_force < 0.0) {
            return Err(ConfigError::InvalidJumpForce(self.jump_force));
        }
        if !(self.restart_delay.is_finite() && self.restart_delay >= 0.0) {
            return Err(ConfigError::InvalidDuration {
                name: "restart_delay",
                value: self.restart_delay,
            });
        }
        if !(self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0) {
            return Err(ConfigError::InvalidDuration {
                name: "max_frame_dt",
                value: self.max_frame_dt,
            });
        }
        Ok(())
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path.as_ref())?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!(
                    "Using default settings ({}): {}",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_platform_from_str() {
        assert_eq!(Platform::from_str("iOS"), Some(Platform::Ios));
        assert_eq!(Platform::from_str("ANDROID"), Some(Platform::Android));
        assert_eq!(Platform::from_str("web"), Some(Platform::Other));
        assert_eq!(Platform::from_str("symbian"), None);
    }

    #[test]
    fn test_platform_offsets() {
        let insets = Insets {
            top: 40.0,
            bottom: 30.0,
        };
        assert_eq!(Platform::Ios.min_offset(insets), 160.0);
        assert_eq!(Platform::Ios.top_offset(insets), 200.0);
        assert_eq!(Platform::Android.min_offset(insets), 180.0);
        assert_eq!(Platform::Android.top_offset(insets), 190.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut s = Settings::default();
        s.screen_width = 0.0;
        assert!(matches!(s.validate(), Err(ConfigError::InvalidScreen { .. })));

        let mut s = Settings::default();
        s.insets.top = s.screen_height;
        assert!(matches!(s.validate(), Err(ConfigError::InsetsTooLarge { .. })));

        let mut s = Settings::default();
        s.gravity = -1.0;
        assert!(matches!(s.validate(), Err(ConfigError::InvalidGravity(_))));

        let mut s = Settings::default();
        s.jump_force = 500.0;
        assert!(matches!(s.validate(), Err(ConfigError::InvalidJumpForce(_))));

        let mut s = Settings::default();
        s.max_frame_dt = 0.0;
        assert!(matches!(
            s.validate(),
            Err(ConfigError::InvalidDuration { name: "max_frame_dt", .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s: Settings =
            serde_json::from_str(r#"{"screen_width": 500.0, "platform": "android"}"#).unwrap();
        assert_eq!(s.screen_width, 500.0);
        assert_eq!(s.platform, Platform::Android);
        assert_eq!(s.gravity, GRAVITY);
        assert_eq!(s.screen_height, Settings::default().screen_height);
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir()
            .join(format!("flappy_sim_settings_{}.json", std::process::id()));
        let mut s = Settings::default();
        s.seed = 77;
        s.platform = Platform::Ios;
        s.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, s);
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let s = Settings::load_or_default("/nonexistent/flappy_sim.json");
        assert_eq!(s, Settings::default());
    }
}
