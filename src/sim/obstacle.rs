//! Obstacle geometry
//!
//! Every obstacle is an axis-aligned rectangle: `origin` is the min corner,
//! `extent` is width x height. The kind selects the collision response in
//! the resolver; geometry here only answers containment queries.
//!
//! Containment is tested against the raw rectangle, not expanded by the
//! ball radius - the ball is treated as a point, which is how the shipped
//! game behaves.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Obstacle kinds with distinct collision responses.
///
/// `MovingPlatform`, `Windmill`, `Bridge`, and `Loop` are scenery in the
/// physics model: the ball passes through them. They still carry animation
/// phase for renderers (see [`Obstacle::effective_origin`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ObstacleKind {
    Wall,
    Sand,
    Water,
    Bumper,
    MovingPlatform,
    Windmill,
    Bridge,
    Loop,
}

impl ObstacleKind {
    /// Whether this kind is animated by the external frame clock
    pub fn is_animated(&self) -> bool {
        matches!(self, ObstacleKind::MovingPlatform | ObstacleKind::Windmill)
    }
}

/// Horizontal sway amplitude of a moving platform (canvas units)
const PLATFORM_SWAY: f32 = 30.0;
/// Windmill blade rotation per second of phase (radians)
const WINDMILL_SPIN_RATE: f32 = 1.4;

/// One obstacle on the course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Min corner of the bounding rectangle
    pub origin: Vec2,
    /// Width x height
    pub extent: Vec2,
    /// Animation phase accumulator (seconds). Advanced by the render
    /// clock via [`Obstacle::advance_phase`]; never read by the resolver.
    #[serde(default)]
    pub phase: f32,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, origin: Vec2, extent: Vec2) -> Self {
        Self {
            kind,
            origin,
            extent,
            phase: 0.0,
        }
    }

    /// Whether the rectangle contains the given point
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.origin.x
            && point.x <= self.origin.x + self.extent.x
            && point.y >= self.origin.y
            && point.y <= self.origin.y + self.extent.y
    }

    /// Center of the rectangle (the bumper kick radiates from here)
    pub fn center(&self) -> Vec2 {
        self.origin + self.extent * 0.5
    }

    /// Advance the animation phase (call once per rendered frame)
    pub fn advance_phase(&mut self, dt: f32) {
        if self.kind.is_animated() {
            self.phase += dt;
        }
    }

    /// Where renderers should draw this obstacle. Moving platforms sway
    /// horizontally around their authored origin; everything else sits
    /// at `origin`.
    pub fn effective_origin(&self) -> Vec2 {
        match self.kind {
            ObstacleKind::MovingPlatform => {
                self.origin + Vec2::new(self.phase.sin() * PLATFORM_SWAY, 0.0)
            }
            _ => self.origin,
        }
    }

    /// Current windmill blade angle in radians (renderer hint)
    pub fn blade_angle(&self) -> f32 {
        match self.kind {
            ObstacleKind::Windmill => self.phase * WINDMILL_SPIN_RATE,
            _ => 0.0,
        }
    }
}
