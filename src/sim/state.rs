//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]; components get it
//! (or one of its parts) by reference and keep no state of their own.

use serde::{Deserialize, Serialize};

use super::geometry::TrackBounds;
use super::rng::GapGenerator;
use super::track::{ObstacleTrack, speed_curve};
use crate::settings::Settings;

/// Current mode of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Before the first run, waiting for a tap
    #[default]
    Ready,
    /// Active gameplay
    Playing,
    /// Frozen mid-run, resumable
    Paused,
    /// Run ended
    GameOver,
}

/// The controlled body (vertical axis only)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    /// Top of the sprite, screen space
    pub y: f32,
    /// Positive = falling
    pub velocity: f32,
}

impl BodyState {
    pub fn at(y: f32) -> Self {
        Self { y, velocity: 0.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreState {
    pub value: u32,
}

impl ScoreState {
    /// Current scroll speed multiplier
    pub fn speed(&self) -> f32 {
        speed_curve(self.value)
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub mode: GameMode,
    pub body: BodyState,
    pub track: ObstacleTrack,
    pub score: ScoreState,
    /// Raised on an obstacle/ceiling hit; taps are dropped until a restart
    pub click_disabled: bool,
    /// Runs started so far (0 while Ready)
    pub run: u32,
    /// Ticks processed
    pub time_ticks: u64,
    /// Geometry precomputed from settings
    pub bounds: TrackBounds,
    pub gravity: f32,
    pub jump_force: f32,
    pub restart_delay: f32,
    pub rng: GapGenerator,
}

impl GameState {
    /// Fresh state in `Ready`. Settings are assumed validated.
    pub fn new(settings: &Settings) -> Self {
        let bounds = TrackBounds::from_settings(settings);
        Self {
            mode: GameMode::Ready,
            body: BodyState::at(bounds.body_start_y),
            track: ObstacleTrack::idle(&bounds),
            score: ScoreState::default(),
            click_disabled: false,
            run: 0,
            time_ticks: 0,
            bounds,
            gravity: settings.gravity,
            jump_force: settings.jump_force,
            restart_delay: settings.restart_delay,
            rng: GapGenerator::new(settings.seed),
        }
    }

    /// Reinitialize body, track and score together and start a new run.
    ///
    /// The gap offset goes back to 0 rather than keeping the last pass's
    /// offset; the first re-roll happens when the first cycle restarts.
    pub fn reset_run(&mut self) {
        let body = BodyState::at(self.bounds.body_start_y);
        let track = ObstacleTrack::started(&self.bounds, self.restart_delay);
        (self.body, self.track, self.score) = (body, track, ScoreState::default());
        self.click_disabled = false;
        self.run += 1;
        self.mode = GameMode::Playing;
    }

    /// Whether physics and the track advance this tick
    pub fn is_live(&self) -> bool {
        self.mode == GameMode::Playing
    }
}
