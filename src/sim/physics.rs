//! Vertical body physics
//!
//! Semi-implicit ordering: position moves with the velocity from *before* this
//! tick's gravity is applied, which gives the slightly floaty fall.

use super::state::BodyState;
use crate::valid_dt;

/// Advance the body by `dt` seconds. A missing, zero or non-finite `dt` leaves
/// the body untouched. Returns whether anything moved.
pub fn integrate(body: &mut BodyState, gravity: f32, dt: Option<f32>) -> bool {
    let Some(dt) = valid_dt(dt) else {
        return false;
    };
    let velocity = body.velocity;
    body.y += velocity * dt;
    body.velocity = velocity + gravity * dt;
    true
}

/// Instant upward impulse; replaces whatever velocity the body had
#[inline]
pub fn jump(body: &mut BodyState, jump_force: f32) {
    body.velocity = jump_force;
}
