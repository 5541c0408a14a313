//! Course and ball state
//!
//! A `Course` is the immutable configuration for one level attempt:
//! start/hole positions, the boundary rectangle, and the obstacle list in
//! declaration order. `BallState` is the only kinematic state and is owned
//! exclusively by the session.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;

/// Axis-aligned course boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Playable interval on each axis after the margin is applied.
    /// Degenerate when either interval is empty or any corner is non-finite.
    pub fn is_degenerate(&self, margin: f32) -> bool {
        !self.min.is_finite()
            || !self.max.is_finite()
            || self.min.x + margin >= self.max.x - margin
            || self.min.y + margin >= self.max.y - margin
    }
}

/// Static configuration for one level attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub start: Vec2,
    pub hole: Vec2,
    /// Ball-to-hole distance below which the hole captures
    pub hole_radius: f32,
    pub bounds: Bounds,
    /// Declaration order is significant: the first obstacle containing the
    /// ball wins when rectangles overlap
    pub obstacles: Vec<Obstacle>,
    pub par: u32,
}

impl Course {
    /// Defensive check for configurations that cannot support motion:
    /// empty playfield, coincident start/hole, or non-finite anchors.
    /// A degenerate course pins the ball at rest rather than integrating.
    pub fn is_degenerate(&self, margin: f32) -> bool {
        self.bounds.is_degenerate(margin)
            || !self.start.is_finite()
            || !self.hole.is_finite()
            || self.hole_radius <= 0.0
            || self.start.distance(self.hole) <= self.hole_radius
    }

    /// Distance from a position to the hole center
    #[inline]
    pub fn hole_distance(&self, pos: Vec2) -> f32 {
        pos.distance(self.hole)
    }
}

/// Ball kinematics, reset wholesale on level reset or water capture
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub at_rest: bool,
}

impl BallState {
    /// A ball sitting still at the tee
    pub fn at_start(course: &Course) -> Self {
        Self {
            position: course.start,
            velocity: Vec2::ZERO,
            at_rest: true,
        }
    }
}
