//! Simulation tick and mode transitions
//!
//! One call to [`tick`] applies every queued input, then (only while Playing)
//! integrates the body, scrolls the track and applies the outcomes of comparing
//! the before/after snapshots.

use serde::{Deserialize, Serialize};

use super::collision::CollisionCause;
use super::events::{GameEvent, Outcome, evaluate};
use super::physics;
use super::snapshot::Snapshot;
use super::state::{GameMode, GameState};

/// Input from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Jump while playing, otherwise start/restart
    Tap,
    /// `true` from the pause button, `false` from the overlay's play button
    PauseToggle(bool),
}

/// Apply one input, recording any transition it causes
pub fn apply_input(state: &mut GameState, input: InputEvent, events: &mut Vec<GameEvent>) {
    match input {
        InputEvent::Tap => {
            if state.click_disabled {
                log::debug!("Tap ignored (clicks disabled)");
                return;
            }
            match state.mode {
                GameMode::Ready | GameMode::GameOver => start_run(state, events),
                GameMode::Playing => {
                    physics::jump(&mut state.body, state.jump_force);
                    events.push(GameEvent::Jumped);
                }
                GameMode::Paused => {}
            }
        }
        InputEvent::PauseToggle(true) => {
            if state.mode == GameMode::Playing {
                state.track.cancel();
                state.mode = GameMode::Paused;
                log::info!("Paused at score {}", state.score.value);
                events.push(GameEvent::Paused);
            }
        }
        InputEvent::PauseToggle(false) => match state.mode {
            GameMode::Paused => {
                state.track.resume();
                state.mode = GameMode::Playing;
                log::info!("Resumed");
                events.push(GameEvent::Resumed);
            }
            GameMode::Ready | GameMode::GameOver => start_run(state, events),
            GameMode::Playing => {}
        },
    }
}

fn start_run(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.reset_run();
    log::info!("Run {} started", state.run);
    events.push(GameEvent::Started { run: state.run });
}

/// End the run. Repeated calls after the first are ignored.
pub fn end_run(state: &mut GameState, cause: CollisionCause, events: &mut Vec<GameEvent>) {
    if state.mode != GameMode::Playing {
        return;
    }
    // A floor landing leaves taps enabled so a tap restarts straight away
    if matches!(cause, CollisionCause::Obstacle | CollisionCause::Ceiling) {
        state.click_disabled = true;
    }
    state.track.cancel();
    state.mode = GameMode::GameOver;
    log::info!("Game over ({:?}) with score {}", cause, state.score.value);
    events.push(GameEvent::Collision { cause });
    events.push(GameEvent::GameOver {
        score: state.score.value,
    });
}

fn apply_outcome(state: &mut GameState, outcome: Outcome, events: &mut Vec<GameEvent>) {
    match outcome {
        Outcome::ScorePassed => {
            if !state.track.pair.scored {
                state.track.pair.scored = true;
                state.score.value += 1;
                events.push(GameEvent::ScorePassed {
                    score: state.score.value,
                });
            }
        }
        Outcome::Collision(cause) => end_run(state, cause, events),
        Outcome::CycleRestart => {
            if !state.is_live() {
                return;
            }
            let bounds = state.bounds;
            let gap_offset = state
                .rng
                .next_gap_offset(bounds.min_interval, bounds.max_interval);
            state.track.pair.gap_offset = gap_offset;
            state.track.start_cycle(state.score.value, 0.0);
            log::debug!(
                "Cycle {}: gap offset {} (draw {}) at speed {:.2}",
                state.track.cycle,
                gap_offset,
                state.rng.draws(),
                state.track.speed
            );
            events.push(GameEvent::CycleRestarted {
                cycle: state.track.cycle,
                gap_offset,
                speed: state.track.speed,
            });
        }
    }
}

/// Advance the game by one frame.
///
/// Inputs are applied first and in order. A missing or zero `dt` still applies
/// inputs but moves nothing.
pub fn tick(state: &mut GameState, inputs: &[InputEvent], dt: Option<f32>) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    for &input in inputs {
        apply_input(state, input, &mut events);
    }

    if !state.is_live() {
        return events;
    }

    let prev = Snapshot::capture(state);
    let moved = physics::integrate(&mut state.body, state.gravity, dt);
    let scrolled = state.track.advance(dt);
    if !moved && !scrolled {
        return events;
    }
    let curr = Snapshot::capture(state);

    for outcome in evaluate(&prev, &curr, &state.bounds) {
        apply_outcome(state, outcome, &mut events);
    }

    events
}
