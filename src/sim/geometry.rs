//! Screen-space geometry for the obstacle track
//!
//! Screen coordinates: origin top-left, y grows downward.
//!
//! The two obstacles of a pair rest at fixed midpoints and are shifted together
//! by the gap offset. Midpoints and the legal offset range are derived once from
//! the screen, insets and platform, never per frame.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::Settings;

/// Axis-aligned rectangle (top-left anchored)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Precomputed bounds for one screen configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackBounds {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Resting y of the top obstacle (gap offset 0)
    pub top_midpoint: f32,
    /// Resting y of the bottom obstacle (gap offset 0)
    pub bottom_midpoint: f32,
    /// Gap offset range, symmetric around 0
    pub min_interval: f32,
    pub max_interval: f32,
    /// Body x (fixed for the whole game)
    pub body_x: f32,
    /// Body y on start/restart
    pub body_start_y: f32,
    /// Body y above this is a floor hit
    pub floor_y: f32,
    /// Body y below this is a ceiling hit
    pub ceiling_y: f32,
}

impl TrackBounds {
    pub fn from_settings(settings: &Settings) -> Self {
        let height = settings.screen_height;
        let width = settings.screen_width;
        let insets = settings.insets;

        let safe_height = height - insets.top - insets.bottom;
        let screen_diff = (safe_height - OBSTACLE_HEIGHT).max(0.0);
        let min_offset = settings.platform.min_offset(insets);
        let top_offset = settings.platform.top_offset(insets);

        let top_max = -OBSTACLE_HEIGHT + screen_diff + top_offset;
        let top_min = -min_offset;
        let bottom_max = screen_diff + top_offset;
        let bottom_min = OBSTACLE_HEIGHT - min_offset;

        let top_midpoint = (top_max + top_min) / 2.0 - HALF_GAP;
        let bottom_midpoint = (bottom_min + bottom_max) / 2.0 + HALF_GAP;

        // Tall screens can push the range negative; collapse it to a fixed gap
        let max_interval = (bottom_min - bottom_midpoint + HALF_GAP).max(0.0);

        Self {
            screen_width: width,
            screen_height: height,
            top_midpoint,
            bottom_midpoint,
            min_interval: -max_interval,
            max_interval,
            body_x: width * BODY_X_FRACTION,
            body_start_y: height / BODY_START_DIVISOR,
            floor_y: height - GROUND_MARGIN - insets.bottom.max(MIN_BOTTOM_INSET),
            ceiling_y: insets.top,
        }
    }

    /// Top obstacle y for a gap offset
    #[inline]
    pub fn top_y(&self, gap_offset: f32) -> f32 {
        self.top_midpoint + gap_offset
    }

    /// Bottom obstacle y for a gap offset
    #[inline]
    pub fn bottom_y(&self, gap_offset: f32) -> f32 {
        self.bottom_midpoint + gap_offset
    }
}
