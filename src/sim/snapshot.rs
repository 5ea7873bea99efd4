//! Read-only view of one tick, for the rendering layer
//!
//! Captured after the tick finishes, so a consumer never sees a half-updated
//! body/track/score combination.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::state::{GameMode, GameState};
use crate::consts::{TILT_MAX, TILT_VELOCITY};
use crate::lerp_clamped;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub mode: GameMode,
    pub score: u32,
    pub body_x: f32,
    pub body_y: f32,
    pub body_velocity: f32,
    /// Sprite rotation in radians (nose down while falling), cosmetic only
    pub tilt: f32,
    pub obstacle_x: f32,
    pub top_y: f32,
    pub bottom_y: f32,
    pub obstacle_width: f32,
    pub top_height: f32,
    pub bottom_height: f32,
    pub gap_offset: f32,
    /// Pair already counted this cycle
    pub scored: bool,
    /// Run and scroll cycle the obstacle sample belongs to
    pub run: u32,
    pub cycle: u32,
    pub cycle_finished: bool,
    pub click_disabled: bool,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let pair = &state.track.pair;
        Self {
            tick: state.time_ticks,
            mode: state.mode,
            score: state.score.value,
            body_x: state.bounds.body_x,
            body_y: state.body.y,
            body_velocity: state.body.velocity,
            tilt: tilt_for(state.body.velocity),
            obstacle_x: pair.x,
            top_y: state.bounds.top_y(pair.gap_offset),
            bottom_y: state.bounds.bottom_y(pair.gap_offset),
            obstacle_width: pair.width,
            top_height: pair.top_height,
            bottom_height: pair.bottom_height,
            gap_offset: pair.gap_offset,
            scored: pair.scored,
            run: state.run,
            cycle: state.track.cycle,
            cycle_finished: state.track.cycle_finished(),
            click_disabled: state.click_disabled,
        }
    }

    /// Body reference point (sprite top-left)
    pub fn body_point(&self) -> Vec2 {
        Vec2::new(self.body_x, self.body_y)
    }

    /// Bottom then top obstacle
    pub fn obstacle_rects(&self) -> [Rect; 2] {
        [
            Rect::new(self.obstacle_x, self.bottom_y, self.obstacle_width, self.bottom_height),
            Rect::new(self.obstacle_x, self.top_y, self.obstacle_width, self.top_height),
        ]
    }

    /// Same run and scroll cycle as `other`
    pub fn same_cycle(&self, other: &Snapshot) -> bool {
        self.run == other.run && self.cycle == other.cycle
    }
}

/// Map vertical velocity onto the clamped tilt range
pub fn tilt_for(velocity: f32) -> f32 {
    lerp_clamped(velocity, -TILT_VELOCITY, TILT_VELOCITY, -TILT_MAX, TILT_MAX)
}
