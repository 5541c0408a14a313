//! Putt Core - a mini-golf simulation engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, stroke lifecycle)
//! - `levels`: Built-in course catalog and level-config loading
//!
//! Rendering, input devices, and score persistence are external
//! collaborators: they drive a [`sim::CourseSession`] through its inbound
//! methods and consume the events it queues each tick.

pub mod levels;
pub mod sim;

pub use levels::LevelConfig;
pub use sim::{CourseSession, PhysicsProfile, SessionEvent};

use glam::{Vec2, Vec3};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep for the scene variant (seconds)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Timestep for the canvas variant, which integrates in whole frames
    pub const FRAME_DT: f32 = 1.0;

    /// Power meter ceiling; charge auto-releases when it is reached
    pub const MAX_POWER: f32 = 100.0;
}

/// Map a planar simulation position onto the 3D scene's ground plane.
///
/// The scene variant keeps the ball at a fixed height above the green;
/// physics only ever runs in the XZ plane.
#[inline]
pub fn planar_to_world(pos: Vec2, ball_height: f32) -> Vec3 {
    Vec3::new(pos.x, ball_height, pos.y)
}

/// Inverse of [`planar_to_world`]: project a scene position back onto the
/// simulation plane.
#[inline]
pub fn world_to_planar(pos: Vec3) -> Vec2 {
    Vec2::new(pos.x, pos.z)
}
