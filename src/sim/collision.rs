//! Collision detection for the actor
//!
//! Pure predicates over explicit numbers. The actor is an axis-aligned square
//! at a fixed horizontal position; obstacles are full-height columns with a
//! passable gap.

use super::state::Obstacle;
use crate::tuning::Tuning;

/// Which edge of the view the actor left through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Top,
    Bottom,
}

/// Result of a collision check for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionResult {
    /// Boundary violated, if any
    pub boundary: Option<Boundary>,
    /// Overlap with at least one obstacle outside its gap
    pub obstacle: bool,
}

impl CollisionResult {
    /// Whether any violation occurred
    pub fn hit(&self) -> bool {
        self.boundary.is_some() || self.obstacle
    }
}

/// Check the actor against the top and bottom of the view
///
/// Touching an edge is allowed; crossing it is not. No side checks.
pub fn boundary_violation(top: f32, size: f32, view_height: f32) -> Option<Boundary> {
    if top < 0.0 {
        Some(Boundary::Top)
    } else if top + size > view_height {
        Some(Boundary::Bottom)
    } else {
        None
    }
}

/// Open-interval overlap of two 1D spans
#[inline]
pub fn spans_overlap(a_start: f32, a_end: f32, b_start: f32, b_end: f32) -> bool {
    a_start < b_end && b_start < a_end
}

/// Check the actor's box against one obstacle
///
/// A hit needs horizontal overlap and the actor not fully inside the gap.
pub fn actor_obstacle_collision(
    actor_x: f32,
    actor_top: f32,
    actor_size: f32,
    obstacle: &Obstacle,
    pipe_width: f32,
) -> bool {
    let horizontal = spans_overlap(
        actor_x,
        actor_x + actor_size,
        obstacle.x,
        obstacle.right(pipe_width),
    );
    if !horizontal {
        return false;
    }
    let actor_bottom = actor_top + actor_size;
    actor_top < obstacle.gap_top() || actor_bottom > obstacle.gap_bottom()
}

/// Whether the actor's leading edge has cleared the obstacle's trailing edge
#[inline]
pub fn actor_passed(obstacle: &Obstacle, tuning: &Tuning) -> bool {
    obstacle.right(tuning.pipe_width) < tuning.actor_x + tuning.actor_size
}

/// Obstacle is entirely left of the view
#[inline]
pub fn off_screen(obstacle: &Obstacle, pipe_width: f32) -> bool {
    obstacle.x <= -pipe_width
}

/// Full collision check for the actor at `actor_top`
pub fn detect(actor_top: f32, obstacles: &[Obstacle], tuning: &Tuning) -> CollisionResult {
    CollisionResult {
        boundary: boundary_violation(actor_top, tuning.actor_size, tuning.view_height),
        obstacle: obstacles.iter().any(|o| {
            actor_obstacle_collision(
                tuning.actor_x,
                actor_top,
                tuning.actor_size,
                o,
                tuning.pipe_width,
            )
        }),
    }
}

/// Nearest in-bounds top edge
#[inline]
pub fn clamp_to_view(top: f32, tuning: &Tuning) -> f32 {
    top.clamp(0.0, tuning.actor_max_y())
}
