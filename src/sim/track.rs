//! Obstacle track
//!
//! A single obstacle pair is recycled forever: each scroll cycle tweens it from
//! the right screen edge to `SCROLL_EXIT_X`, and crossing `REENTRY_X` snaps it
//! back with a freshly drawn gap. Speed is sampled from the score when a cycle
//! starts and stays fixed for that pass.

use serde::{Deserialize, Serialize};

use super::geometry::TrackBounds;
use crate::consts::*;
use crate::{lerp_clamped, valid_dt};

/// Score-driven speed multiplier (1.0 at 0, 1.5 at 30+)
pub fn speed_curve(score: u32) -> f32 {
    lerp_clamped(
        score as f32,
        0.0,
        SPEED_MAX_SCORE as f32,
        SPEED_MIN,
        SPEED_MAX,
    )
}

/// The recycled obstacle pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePair {
    /// Shared left edge of both obstacles
    pub x: f32,
    /// Vertical shift of the gap from its resting position
    pub gap_offset: f32,
    pub width: f32,
    pub top_height: f32,
    pub bottom_height: f32,
    /// Already counted toward the score this cycle
    pub scored: bool,
}

impl ObstaclePair {
    pub fn new(x: f32) -> Self {
        Self {
            x,
            gap_offset: 0.0,
            width: OBSTACLE_WIDTH,
            top_height: OBSTACLE_HEIGHT,
            bottom_height: OBSTACLE_HEIGHT,
            scored: false,
        }
    }
}

/// Linear tween driving the pair's x, on the simulation timeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollTween {
    pub from: f32,
    pub to: f32,
    /// Seconds for the whole pass
    pub duration: f32,
    pub elapsed: f32,
    /// Seconds to wait before moving
    pub delay: f32,
    /// Cleared by pause/collision; a stopped tween never moves the pair
    pub running: bool,
}

impl ScrollTween {
    fn new(from: f32, duration: f32, delay: f32) -> Self {
        Self {
            from,
            to: SCROLL_EXIT_X,
            duration,
            elapsed: 0.0,
            delay,
            running: true,
        }
    }

    fn idle(from: f32) -> Self {
        Self {
            running: false,
            ..Self::new(from, BASE_SCROLL_DURATION, 0.0)
        }
    }

    #[inline]
    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[inline]
    fn value(&self) -> f32 {
        let t = if self.duration > 0.0 {
            (self.elapsed / self.duration).min(1.0)
        } else {
            1.0
        };
        self.from + (self.to - self.from) * t
    }

    /// Step the tween; spends the start delay first
    fn step(&mut self, mut dt: f32) -> Option<f32> {
        if !self.running || self.finished() {
            return None;
        }
        if self.delay > 0.0 {
            let spent = dt.min(self.delay);
            self.delay -= spent;
            dt -= spent;
            if dt <= 0.0 {
                return None;
            }
        }
        self.elapsed = (self.elapsed + dt).min(self.duration);
        Some(self.value())
    }
}

/// Obstacle pair plus its scroll state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleTrack {
    pub pair: ObstaclePair,
    pub tween: ScrollTween,
    /// Scroll cycles started on this track
    pub cycle: u32,
    /// Speed multiplier sampled at the start of the current cycle
    pub speed: f32,
    spawn_x: f32,
}

impl ObstacleTrack {
    /// Parked at the right edge, not scrolling
    pub fn idle(bounds: &TrackBounds) -> Self {
        let spawn_x = bounds.screen_width;
        Self {
            pair: ObstaclePair::new(spawn_x),
            tween: ScrollTween::idle(spawn_x),
            cycle: 0,
            speed: SPEED_MIN,
            spawn_x,
        }
    }

    /// Fresh track whose first cycle begins after `delay` seconds
    pub fn started(bounds: &TrackBounds, delay: f32) -> Self {
        let mut track = Self::idle(bounds);
        track.start_cycle(0, delay);
        track
    }

    /// Snap back to the spawn edge and begin a new pass at the current speed
    pub fn start_cycle(&mut self, score: u32, delay: f32) {
        self.speed = speed_curve(score);
        self.pair.x = self.spawn_x;
        self.pair.scored = false;
        self.tween = ScrollTween::new(self.spawn_x, BASE_SCROLL_DURATION / self.speed, delay);
        self.cycle += 1;
    }

    /// Stop the tween where it is
    pub fn cancel(&mut self) {
        self.tween.running = false;
    }

    /// Continue a cancelled tween from its frozen position and speed
    pub fn resume(&mut self) {
        if self.cycle > 0 {
            self.tween.running = true;
        }
    }

    pub fn is_running(&self) -> bool {
        self.tween.running
    }

    /// Move the pair along the current pass. No-op without a usable `dt`.
    pub fn advance(&mut self, dt: Option<f32>) -> bool {
        let Some(dt) = valid_dt(dt) else {
            return false;
        };
        match self.tween.step(dt) {
            Some(x) => {
                self.pair.x = x;
                true
            }
            None => false,
        }
    }

    /// Pass ran out without re-entering (fallback restart trigger)
    pub fn cycle_finished(&self) -> bool {
        self.cycle > 0 && self.tween.finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn bounds() -> TrackBounds {
        TrackBounds::from_settings(&Settings::for_screen(
            400.0,
            800.0,
            Default::default(),
            Default::default(),
        ))
    }

    #[test]
    fn test_speed_curve() {
        assert_eq!(speed_curve(0), 1.0);
        assert_eq!(speed_curve(30), 1.5);
        assert_eq!(speed_curve(60), 1.5);
        assert!((speed_curve(15) - 1.25).abs() < 1e-6);
    }

    #[test]
    fn test_linear_scroll() {
        let mut track = ObstacleTrack::started(&bounds(), 0.0);
        assert_eq!(track.pair.x, 400.0);
        assert_eq!(track.cycle, 1);
        // 550px over 3s
        track.advance(Some(1.5));
        assert!((track.pair.x - (400.0 - 275.0)).abs() < 1e-3);
        track.advance(Some(10.0));
        assert_eq!(track.pair.x, SCROLL_EXIT_X);
        assert!(track.cycle_finished());
    }

    #[test]
    fn test_delay_is_spent_first() {
        let mut track = ObstacleTrack::started(&bounds(), 0.3);
        assert!(!track.advance(Some(0.2)));
        assert_eq!(track.pair.x, 400.0);
        assert!(track.advance(Some(0.2)));
        let expected = 400.0 - 550.0 * (0.1 / 3.0);
        assert!((track.pair.x - expected).abs() < 1e-2);
    }

    #[test]
    fn test_start_cycle_samples_speed() {
        let mut track = ObstacleTrack::started(&bounds(), 0.0);
        assert_eq!(track.tween.duration, 3.0);
        track.advance(Some(1.0));
        let x_mid = track.pair.x;
        track.start_cycle(30, 0.0);
        assert_eq!(track.cycle, 2);
        assert_eq!(track.pair.x, 400.0);
        assert!((track.tween.duration - 2.0).abs() < 1e-6);
        assert!(x_mid < 400.0);
    }

    #[test]
    fn test_cancel_and_resume() {
        let mut track = ObstacleTrack::started(&bounds(), 0.0);
        track.advance(Some(0.5));
        let frozen = track;
        track.cancel();
        assert!(!track.advance(Some(1.0)));
        assert_eq!(track.pair, frozen.pair);
        track.resume();
        assert_eq!(track.tween.elapsed, frozen.tween.elapsed);
        assert_eq!(track.tween.duration, frozen.tween.duration);
        track.advance(Some(0.5));
        assert!((track.pair.x - (400.0 - 550.0 / 3.0)).abs() < 1e-2);
    }

    #[test]
    fn test_idle_track_never_moves() {
        let mut track = ObstacleTrack::idle(&bounds());
        track.resume();
        assert!(!track.advance(Some(1.0)));
        assert!(!track.cycle_finished());
    }
}
