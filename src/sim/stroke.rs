//! Stroke lifecycle state
//!
//! One stroke runs aim -> charge -> shoot -> roll -> rest/hole. The types
//! here hold the aim/power inputs and the counters; the transitions are
//! driven by [`super::session::CourseSession`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_POWER;

use super::profile::PhysicsProfile;

/// Current phase of a stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StrokePhase {
    /// Waiting for the player to start lining up a shot
    #[default]
    Idle,
    /// Aim direction is being adjusted
    Aiming,
    /// Power meter is running
    Charging,
    /// Ball is in motion; integrator + resolver run each tick
    Rolling,
    /// Hole captured; terminal until an external reset or level advance
    LevelComplete,
}

/// Aim/power inputs and stroke counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrokeState {
    pub phase: StrokePhase,
    /// Unit aim direction; zero until the first aim update
    pub aim_direction: Vec2,
    /// Power meter value, 0..100
    pub power: f32,
    /// Strokes taken this attempt (zeroed on reset)
    pub strokes: u32,
    /// Strokes across all attempts and levels (never zeroed)
    pub total_strokes: u32,
}

impl Default for StrokeState {
    fn default() -> Self {
        Self {
            phase: StrokePhase::Idle,
            aim_direction: Vec2::ZERO,
            power: 0.0,
            strokes: 0,
            total_strokes: 0,
        }
    }
}

impl StrokeState {
    /// Advance the power meter by one charge tick. Returns true when the
    /// ceiling was reached and the shot should auto-release.
    pub fn charge(&mut self, profile: &PhysicsProfile) -> bool {
        self.power = (self.power + profile.charge_step).min(MAX_POWER);
        self.power >= MAX_POWER
    }

    /// Initial velocity for the shot about to be taken.
    ///
    /// A zero aim vector falls back to `fallback_direction`, so a shot
    /// released before any aim input still heads toward the hole.
    pub fn launch_velocity(&self, fallback_direction: Vec2, profile: &PhysicsProfile) -> Vec2 {
        let dir = self.aim_direction.normalize_or(fallback_direction);
        dir * (self.power / MAX_POWER) * profile.max_speed
    }

    /// Book-keeping for the transition into Rolling
    pub fn take_stroke(&mut self) {
        self.strokes += 1;
        self.total_strokes += 1;
        self.power = 0.0;
        self.phase = StrokePhase::Rolling;
    }
}

/// Result of a completed hole relative to par
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreRating {
    /// Finished under par by the given number of strokes
    UnderPar(u32),
    Par,
    /// Finished over par by the given number of strokes
    OverPar(u32),
}

impl ScoreRating {
    pub fn for_strokes(strokes: u32, par: u32) -> Self {
        if strokes < par {
            ScoreRating::UnderPar(par - strokes)
        } else if strokes == par {
            ScoreRating::Par
        } else {
            ScoreRating::OverPar(strokes - par)
        }
    }

    /// Scoreboard label the UI shows on level completion
    pub fn label(&self) -> String {
        match self {
            ScoreRating::UnderPar(n) => format!("Birdie! {n} under par!"),
            ScoreRating::Par => "Par! Well played!".to_string(),
            ScoreRating::OverPar(n) => format!("{n} over par"),
        }
    }
}
