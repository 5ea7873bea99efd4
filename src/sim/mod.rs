//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame delta supplied by the caller, never read from a clock
//! - Seeded RNG only
//! - One owner of all mutable state ([`GameState`])
//! - No rendering or platform dependencies

pub mod collision;
pub mod events;
pub mod geometry;
pub mod physics;
pub mod rng;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod track;

pub use collision::{CollisionCause, boundary_violation, detect, point_hits_rect};
pub use events::{GameEvent, Outcome, evaluate};
pub use geometry::{Rect, TrackBounds};
pub use rng::GapGenerator;
pub use snapshot::Snapshot;
pub use state::{BodyState, GameMode, GameState, ScoreState};
pub use tick::{InputEvent, apply_input, end_run, tick};
pub use track::{ObstaclePair, ObstacleTrack, ScrollTween, speed_curve};
