//! Flappy Sim - deterministic core of a side-scrolling gap-flying game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacle track, collisions, state machine)
//! - `game`: Frame driver that queues input and publishes snapshots
//! - `settings`: Screen geometry and tuning loaded from JSON
//!
//! Drawing, sprite animation and menus live outside this crate. They read a
//! [`sim::Snapshot`] each frame and feed taps/pause toggles back through [`Game`].

pub mod error;
pub mod game;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use game::Game;
pub use settings::{Insets, Platform, Settings};

/// Game configuration constants
pub mod consts {
    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 1000.0;
    /// Velocity set by a jump (negative = up)
    pub const JUMP_FORCE: f32 = -500.0;

    /// Obstacle sprite dimensions
    pub const OBSTACLE_WIDTH: f32 = 104.0;
    pub const OBSTACLE_HEIGHT: f32 = 640.0;
    /// Half the vertical opening between the two obstacles
    pub const HALF_GAP: f32 = 110.0;

    /// Scroll cycle: from screen width to this x
    pub const SCROLL_EXIT_X: f32 = -150.0;
    /// Crossing this x (from above) re-rolls the gap and restarts the cycle
    pub const REENTRY_X: f32 = -100.0;
    /// Cycle duration at speed 1.0 (seconds)
    pub const BASE_SCROLL_DURATION: f32 = 3.0;
    /// Speed curve: 1.0x at score 0 up to 1.5x at score 30
    pub const SPEED_MIN: f32 = 1.0;
    pub const SPEED_MAX: f32 = 1.5;
    pub const SPEED_MAX_SCORE: u32 = 30;

    /// Body sprite height
    pub const BODY_HEIGHT: f32 = 48.0;
    /// Body x as a fraction of screen width
    pub const BODY_X_FRACTION: f32 = 0.25;
    /// Body start y as screen height / this
    pub const BODY_START_DIVISOR: f32 = 2.2;

    /// Hit test margins around the body reference point
    pub const COLLISION_MARGIN: f32 = 20.0;
    /// Vertical offset from draw anchor to visual center
    pub const ANCHOR_Y: f32 = BODY_HEIGHT / 2.0;

    /// Ground strip height above the bottom inset
    pub const GROUND_MARGIN: f32 = 55.0;
    /// Minimum bottom inset used for the ground strip
    pub const MIN_BOTTOM_INSET: f32 = 20.0;

    /// Delay before the first scroll cycle of a run (seconds)
    pub const RESTART_DELAY: f32 = 0.3;
    /// Largest frame delta the driver will integrate (seconds)
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Cosmetic tilt: velocity range mapped onto [-TILT_MAX, TILT_MAX] radians
    pub const TILT_VELOCITY: f32 = 500.0;
    pub const TILT_MAX: f32 = 0.5;
}

/// Linear interpolation of `x` from `[x0, x1]` onto `[y0, y1]`, clamped to the output range
#[inline]
pub fn lerp_clamped(x: f32, x0: f32, x1: f32, y0: f32, y1: f32) -> f32 {
    if x1 == x0 {
        return y0;
    }
    let t = ((x - x0) / (x1 - x0)).clamp(0.0, 1.0);
    y0 + (y1 - y0) * t
}

/// True for a usable frame delta (finite and strictly positive)
#[inline]
pub fn valid_dt(dt: Option<f32>) -> Option<f32> {
    dt.filter(|dt| dt.is_finite() && *dt > 0.0)
}
