//! Course session orchestration
//!
//! A `CourseSession` owns one level attempt: the course, the ball, and the
//! stroke state. External collaborators (renderer, input layer) drive it
//! through the inbound methods and drain the event queue once per frame.
//! Out-of-causal-order inputs are silently ignored - this is a real-time
//! loop, not an API with error contracts.

use glam::Vec2;

use super::collision::{self, SideEffect};
use super::course::{BallState, Course};
use super::integrate;
use super::obstacle::Obstacle;
use super::profile::PhysicsProfile;
use super::stroke::{ScoreRating, StrokePhase, StrokeState};

/// Outbound events, queued per tick and drained by the caller
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Ball moved this tick (rolling only)
    PositionChanged(Vec2),
    /// Aim direction or power changed
    AimUpdated { direction: Vec2, power: f32 },
    /// A shot was released; payload is the attempt's stroke count
    StrokeTaken(u32),
    /// Ball entered the capture radius. Fires exactly once per capture.
    HoleReached,
    /// Ball stopped without reaching the hole
    RestReached,
}

/// One level attempt: course + ball + stroke lifecycle
pub struct CourseSession {
    course: Course,
    profile: PhysicsProfile,
    ball: BallState,
    stroke: StrokeState,
    events: Vec<SessionEvent>,
    /// Degenerate configurations pin the ball at rest instead of integrating
    degenerate: bool,
}

impl CourseSession {
    pub fn new(course: Course, profile: PhysicsProfile) -> Self {
        let degenerate = course.is_degenerate(profile.boundary_margin);
        if degenerate {
            log::warn!("course configuration is degenerate; ball will stay at rest");
        }
        log::info!(
            "course loaded: par {}, {} obstacles",
            course.par,
            course.obstacles.len()
        );
        let ball = BallState::at_start(&course);
        Self {
            course,
            profile,
            ball,
            stroke: StrokeState::default(),
            events: Vec::new(),
            degenerate,
        }
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn profile(&self) -> &PhysicsProfile {
        &self.profile
    }

    pub fn ball(&self) -> &BallState {
        &self.ball
    }

    pub fn stroke(&self) -> &StrokeState {
        &self.stroke
    }

    pub fn phase(&self) -> StrokePhase {
        self.stroke.phase
    }

    /// Result of the attempt so far, relative to par
    pub fn score(&self) -> ScoreRating {
        ScoreRating::for_strokes(self.stroke.strokes, self.course.par)
    }

    /// Take the events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Inbound: player wants to line up a shot. Ignored while the ball is
    /// rolling or after the hole was captured.
    pub fn start_aiming(&mut self) {
        if self.stroke.phase == StrokePhase::Idle {
            self.stroke.phase = StrokePhase::Aiming;
            self.stroke.power = 0.0;
            log::debug!("aiming started");
        }
    }

    /// Inbound: new intended aim vector. Ignored unless aiming or charging,
    /// and ignored for zero/non-finite input.
    pub fn update_aim(&mut self, direction: Vec2) {
        if !matches!(
            self.stroke.phase,
            StrokePhase::Aiming | StrokePhase::Charging
        ) {
            return;
        }
        let Some(dir) = direction.try_normalize() else {
            return;
        };
        self.stroke.aim_direction = dir;
        self.events.push(SessionEvent::AimUpdated {
            direction: dir,
            power: self.stroke.power,
        });
    }

    /// Inbound: press-and-hold started; the power meter begins running
    pub fn begin_charge(&mut self) {
        if self.stroke.phase == StrokePhase::Aiming {
            self.stroke.phase = StrokePhase::Charging;
            self.stroke.power = 0.0;
        }
    }

    /// Inbound: press released. A release with no accumulated power drops
    /// back to aiming instead of taking a wasted stroke.
    pub fn release_charge(&mut self) {
        if self.stroke.phase != StrokePhase::Charging {
            return;
        }
        if self.stroke.power <= 0.0 {
            self.stroke.phase = StrokePhase::Aiming;
            return;
        }
        self.shoot();
    }

    /// Inbound: restore the attempt without touching cumulative totals
    pub fn reset_level(&mut self) {
        self.ball = BallState::at_start(&self.course);
        self.stroke.phase = StrokePhase::Idle;
        self.stroke.power = 0.0;
        self.stroke.strokes = 0;
        self.events.clear();
        log::info!("level reset");
    }

    /// Inbound: swap in the next course. Attempt state is re-initialized
    /// wholesale; `total_strokes` carries across levels.
    pub fn advance_level(&mut self, course: Course) {
        self.degenerate = course.is_degenerate(self.profile.boundary_margin);
        if self.degenerate {
            log::warn!("course configuration is degenerate; ball will stay at rest");
        }
        log::info!(
            "advancing to course: par {}, {} obstacles",
            course.par,
            course.obstacles.len()
        );
        self.ball = BallState::at_start(&course);
        self.course = course;
        self.stroke.phase = StrokePhase::Idle;
        self.stroke.power = 0.0;
        self.stroke.strokes = 0;
        self.events.clear();
    }

    /// Inbound: the render clock advancing animated obstacle phases.
    /// The resolver never reads these; they exist for display.
    pub fn advance_animations(&mut self, dt: f32) {
        for obstacle in &mut self.course.obstacles {
            obstacle.advance_phase(dt);
        }
    }

    /// Renderer access to obstacle geometry and animation state
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.course.obstacles
    }

    /// Advance the simulation by one tick.
    ///
    /// Charging accumulates power (auto-releasing at the ceiling); rolling
    /// runs integrator -> resolver -> capture/rest checks in that order.
    /// All other phases are quiescent.
    pub fn tick(&mut self, dt: f32) {
        match self.stroke.phase {
            StrokePhase::Charging => {
                let ceiling = self.stroke.charge(&self.profile);
                self.events.push(SessionEvent::AimUpdated {
                    direction: self.stroke.aim_direction,
                    power: self.stroke.power,
                });
                if ceiling {
                    self.shoot();
                }
            }
            StrokePhase::Rolling => self.tick_rolling(dt),
            StrokePhase::Idle | StrokePhase::Aiming | StrokePhase::LevelComplete => {}
        }
    }

    fn tick_rolling(&mut self, dt: f32) {
        if self.degenerate {
            self.settle_without_capture();
            return;
        }

        let (pos, vel) = integrate::step(self.ball.position, self.ball.velocity, dt, &self.profile);
        let resolved = collision::resolve(pos, vel, &self.course, &self.profile);

        // Whole-struct swap keeps the ball state atomic per tick
        self.ball = BallState {
            position: resolved.position,
            velocity: resolved.velocity,
            at_rest: resolved.at_rest,
        };

        if resolved.side_effect == SideEffect::ResetToStart {
            log::debug!("water hazard: ball returned to tee");
        }

        self.events
            .push(SessionEvent::PositionChanged(self.ball.position));

        // Capture is checked every tick so a fast ball passing over the
        // cup still drops; it takes precedence over rest detection.
        if self.course.hole_distance(self.ball.position) < self.course.hole_radius {
            self.ball.velocity = Vec2::ZERO;
            self.ball.at_rest = true;
            self.stroke.phase = StrokePhase::LevelComplete;
            self.events.push(SessionEvent::HoleReached);
            log::info!(
                "hole reached in {} strokes: {}",
                self.stroke.strokes,
                self.score().label()
            );
        } else if resolved.at_rest {
            self.settle_without_capture();
        }
    }

    fn settle_without_capture(&mut self) {
        self.ball.velocity = Vec2::ZERO;
        self.ball.at_rest = true;
        self.stroke.phase = StrokePhase::Idle;
        self.events.push(SessionEvent::RestReached);
    }

    fn shoot(&mut self) {
        // Aim defaults toward the hole when no direction was ever given
        let fallback = (self.course.hole - self.ball.position).normalize_or(Vec2::NEG_Y);
        let velocity = self.stroke.launch_velocity(fallback, &self.profile);
        self.stroke.take_stroke();
        self.ball.velocity = velocity;
        self.ball.at_rest = false;
        self.events
            .push(SessionEvent::StrokeTaken(self.stroke.strokes));
        log::debug!(
            "stroke {} released at speed {:.2}",
            self.stroke.strokes,
            velocity.length()
        );
    }
}
