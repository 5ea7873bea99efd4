//! Per-tick event evaluation
//!
//! Everything that depends on how a value changed during a tick is decided
//! here, from the snapshot before the tick and the one after it. The tick then
//! applies the returned outcomes in order.

use serde::{Deserialize, Serialize};

use super::collision::{self, CollisionCause};
use super::geometry::TrackBounds;
use super::snapshot::Snapshot;
use crate::consts::REENTRY_X;

/// Outcomes of comparing two consecutive snapshots, in application order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Pair crossed the body's x
    ScorePassed,
    /// Body hit something
    Collision(CollisionCause),
    /// Pair left the screen; draw a new gap and restart the pass
    CycleRestart,
}

/// Observable events reported to the driver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A run began (first start or restart)
    Started { run: u32 },
    Jumped,
    Paused,
    Resumed,
    ScorePassed { score: u32 },
    CycleRestarted { cycle: u32, gap_offset: f32, speed: f32 },
    Collision { cause: CollisionCause },
    GameOver { score: u32 },
}

/// Compare the snapshots around one tick.
///
/// Crossing rules only fire when both samples belong to the same run and
/// scroll cycle, so the first sample of a cycle never scores or re-enters.
pub fn evaluate(prev: &Snapshot, curr: &Snapshot, bounds: &TrackBounds) -> Vec<Outcome> {
    let mut outcomes = Vec::new();
    let same_cycle = prev.same_cycle(curr);

    if same_cycle
        && !curr.scored
        && prev.obstacle_x > curr.body_x
        && curr.obstacle_x <= curr.body_x
    {
        outcomes.push(Outcome::ScorePassed);
    }

    if let Some(cause) = collision::detect(curr.body_point(), &curr.obstacle_rects(), bounds) {
        outcomes.push(Outcome::Collision(cause));
    }

    let reentered = prev.obstacle_x > REENTRY_X && curr.obstacle_x < REENTRY_X;
    if same_cycle && (reentered || curr.cycle_finished) {
        outcomes.push(Outcome::CycleRestart);
    }

    outcomes
}
