//! Per-variant physics tuning
//!
//! The 2D canvas build and the 3D scene build share one simulation core but
//! run at different presentation scales (pixels per frame vs. world units
//! per second). Everything scale-dependent lives in this struct so neither
//! variant needs its own physics code.

use serde::{Deserialize, Serialize};

/// Tuning constants for one presentation profile.
///
/// Friction and restitution happen to agree between the two shipped
/// profiles; max speed, margins, and charge rate do not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsProfile {
    /// Velocity retained per tick while rolling (applied once per tick,
    /// not scaled by dt - the step cadence is fixed per variant)
    pub friction_factor: f32,
    /// Fraction of speed retained after a boundary bounce
    pub restitution: f32,
    /// Launch speed at 100% power
    pub max_speed: f32,
    /// Speed magnitude below which the ball is snapped to rest
    pub rest_epsilon: f32,
    /// Distance kept between ball center and the course boundary
    pub boundary_margin: f32,
    /// Ball radius, used by renderers and the default capture visuals
    pub ball_radius: f32,
    /// Power added per tick while charging (meter runs 0..100)
    pub charge_step: f32,
}

impl PhysicsProfile {
    /// The 2D canvas variant: pixel units, one tick per animation frame.
    pub fn canvas() -> Self {
        Self {
            friction_factor: 0.98,
            restitution: 0.8,
            max_speed: 8.0,
            rest_epsilon: 0.1,
            boundary_margin: 20.0,
            ball_radius: 8.0,
            charge_step: 2.0,
        }
    }

    /// The 3D scene variant: world units, seconds-based dt on the XZ plane.
    pub fn scene() -> Self {
        Self {
            friction_factor: 0.98,
            restitution: 0.8,
            max_speed: 15.0,
            rest_epsilon: 0.1,
            boundary_margin: 0.1,
            ball_radius: 0.1,
            charge_step: 3.0,
        }
    }
}

impl Default for PhysicsProfile {
    fn default() -> Self {
        Self::canvas()
    }
}
