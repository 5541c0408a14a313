//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, driven by the caller's frame clock
//! - No randomness; courses are authored data
//! - Stable obstacle iteration order (declaration order is the overlap tie-break)
//! - No rendering or platform dependencies

pub mod collision;
pub mod course;
pub mod integrate;
pub mod obstacle;
pub mod profile;
pub mod session;
pub mod stroke;

pub use collision::{Resolution, SideEffect, resolve};
pub use course::{BallState, Bounds, Course};
pub use integrate::step;
pub use obstacle::{Obstacle, ObstacleKind};
pub use profile::PhysicsProfile;
pub use session::{CourseSession, SessionEvent};
pub use stroke::{ScoreRating, StrokePhase, StrokeState};
