//! Collision detection
//!
//! The body is a single reference point (its sprite's top-left draw anchor)
//! with fixed margins standing in for the sprite extent. The margins and the
//! `ANCHOR_Y` correction were tuned by hand against the artwork; keep them as is.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Rect, TrackBounds};
use crate::consts::{ANCHOR_Y, COLLISION_MARGIN};

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionCause {
    /// Touched one of the obstacles
    Obstacle,
    /// Flew above the playable area
    Ceiling,
    /// Fell onto the ground strip
    Floor,
}

/// Hit test of the body anchor against a rectangle.
///
/// Horizontally the point reaches `COLLISION_MARGIN` forward and not at all
/// backward; vertically it is shifted by `ANCHOR_Y` and padded by the margin
/// both ways.
#[inline]
pub fn point_hits_rect(point: Vec2, rect: &Rect) -> bool {
    let center_y = point.y + ANCHOR_Y;
    point.x + COLLISION_MARGIN >= rect.x
        && point.x <= rect.right()
        && center_y + COLLISION_MARGIN >= rect.y
        && center_y - COLLISION_MARGIN <= rect.bottom()
}

/// Body outside the vertical playable band
pub fn boundary_violation(body_y: f32, bounds: &TrackBounds) -> Option<CollisionCause> {
    if body_y > bounds.floor_y {
        Some(CollisionCause::Floor)
    } else if body_y < bounds.ceiling_y {
        Some(CollisionCause::Ceiling)
    } else {
        None
    }
}

/// Full check for one tick: obstacles first, then the band edges
pub fn detect(point: Vec2, obstacles: &[Rect], bounds: &TrackBounds) -> Option<CollisionCause> {
    if obstacles.iter().any(|rect| point_hits_rect(point, rect)) {
        return Some(CollisionCause::Obstacle);
    }
    boundary_violation(point.y, bounds)
}
