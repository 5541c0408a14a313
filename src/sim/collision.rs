//! Collision resolution
//!
//! Takes the integrator's proposed position/velocity and corrects it against
//! the course. Phase order is fixed and load-bearing:
//!
//! 1. boundary clamp (per-axis reflection with restitution)
//! 2. obstacle scan - first containing obstacle in declaration order wins,
//!    obstacles never stack within one tick
//! 3. rest detection
//!
//! Water's hard reset overrides any boundary correction computed earlier in
//! the same tick. Global friction is the integrator's job and is not
//! reapplied here.

use glam::Vec2;

use super::course::Course;
use super::obstacle::ObstacleKind;
use super::profile::PhysicsProfile;

/// Speed multiplier a bumper applies on contact
const BUMPER_BOOST: f32 = 1.5;
/// Velocity retained inside a sand trap, on top of global friction
const SAND_DRAG: f32 = 0.7;

/// Side effect of a resolution, applied by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SideEffect {
    #[default]
    None,
    /// Ball entered water; kinematics were reset to the tee
    ResetToStart,
}

/// Corrected kinematics for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub position: Vec2,
    pub velocity: Vec2,
    pub at_rest: bool,
    pub side_effect: SideEffect,
}

/// Resolve a proposed ball state against the course.
///
/// Pure with respect to the course: obstacles and bounds are read-only.
/// Hole capture is not evaluated here - it depends on course-level state
/// the session owns.
pub fn resolve(
    proposed_position: Vec2,
    proposed_velocity: Vec2,
    course: &Course,
    profile: &PhysicsProfile,
) -> Resolution {
    // Non-finite kinematics degrade to rest at the tee rather than
    // propagating NaN through the rest of the attempt.
    if !proposed_position.is_finite() || !proposed_velocity.is_finite() {
        return Resolution {
            position: course.start,
            velocity: Vec2::ZERO,
            at_rest: true,
            side_effect: SideEffect::ResetToStart,
        };
    }

    // A boundary with no playable interior cannot support motion at all
    if course.bounds.is_degenerate(profile.boundary_margin) {
        return Resolution {
            position: course.start,
            velocity: Vec2::ZERO,
            at_rest: true,
            side_effect: SideEffect::None,
        };
    }

    let mut pos = proposed_position;
    let mut vel = proposed_velocity;
    let mut side_effect = SideEffect::None;

    clamp_to_bounds(&mut pos, &mut vel, course, profile);

    // First containing obstacle wins; declaration order is the tie-break.
    if let Some(obstacle) = course.obstacles.iter().find(|o| o.contains(pos)) {
        match obstacle.kind {
            ObstacleKind::Wall => {
                // Force each velocity component outward, toward whichever
                // edge the ball is nearer. Both axes can flip in one tick.
                let left = obstacle.origin.x;
                let right = obstacle.origin.x + obstacle.extent.x;
                let top = obstacle.origin.y;
                let bottom = obstacle.origin.y + obstacle.extent.y;

                vel.x = if (pos.x - left).abs() < (pos.x - right).abs() {
                    -vel.x.abs()
                } else {
                    vel.x.abs()
                };
                vel.y = if (pos.y - top).abs() < (pos.y - bottom).abs() {
                    -vel.y.abs()
                } else {
                    vel.y.abs()
                };
            }
            ObstacleKind::Sand => {
                vel *= SAND_DRAG;
            }
            ObstacleKind::Water => {
                // Hard reset, superseding any boundary correction above
                pos = course.start;
                vel = Vec2::ZERO;
                side_effect = SideEffect::ResetToStart;
            }
            ObstacleKind::Bumper => {
                // Radial kick: redirect along center->ball, amplified.
                // Incoming direction is discarded entirely.
                let away = pos - obstacle.center();
                let angle = away.y.atan2(away.x);
                let speed = vel.length() * BUMPER_BOOST;
                vel = Vec2::new(angle.cos(), angle.sin()) * speed;
            }
            ObstacleKind::MovingPlatform
            | ObstacleKind::Windmill
            | ObstacleKind::Bridge
            | ObstacleKind::Loop => {
                // Scenery: no physical response
            }
        }
    }

    let at_rest = vel.length() < profile.rest_epsilon;
    if at_rest {
        vel = Vec2::ZERO;
    }

    Resolution {
        position: pos,
        velocity: vel,
        at_rest,
        side_effect,
    }
}

/// Per-axis boundary reflection and clamp
fn clamp_to_bounds(pos: &mut Vec2, vel: &mut Vec2, course: &Course, profile: &PhysicsProfile) {
    let margin = profile.boundary_margin;
    let lo = course.bounds.min + Vec2::splat(margin);
    let hi = course.bounds.max - Vec2::splat(margin);

    if pos.x <= lo.x || pos.x >= hi.x {
        vel.x = -vel.x * profile.restitution;
        pos.x = pos.x.clamp(lo.x, hi.x);
    }
    if pos.y <= lo.y || pos.y >= hi.y {
        vel.y = -vel.y * profile.restitution;
        pos.y = pos.y.clamp(lo.y, hi.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::course::Bounds;
    use crate::sim::obstacle::Obstacle;

    fn course_with(obstacles: Vec<Obstacle>) -> Course {
        Course {
            start: Vec2::new(50.0, 500.0),
            hole: Vec2::new(750.0, 100.0),
            hole_radius: 20.0,
            bounds: Bounds::new(Vec2::ZERO, Vec2::new(800.0, 600.0)),
            obstacles,
            par: 3,
        }
    }

    fn profile() -> PhysicsProfile {
        PhysicsProfile::canvas()
    }

    #[test]
    fn test_open_field_passes_through() {
        let course = course_with(Vec::new());
        let r = resolve(Vec2::new(400.0, 300.0), Vec2::new(5.0, 0.0), &course, &profile());
        assert_eq!(r.position, Vec2::new(400.0, 300.0));
        assert_eq!(r.velocity, Vec2::new(5.0, 0.0));
        assert!(!r.at_rest);
        assert_eq!(r.side_effect, SideEffect::None);
    }

    #[test]
    fn test_boundary_reflects_with_restitution() {
        let course = course_with(Vec::new());
        // Past the right edge (margin 20 -> playable max x = 780)
        let r = resolve(Vec2::new(795.0, 300.0), Vec2::new(5.0, 2.0), &course, &profile());
        assert_eq!(r.position.x, 780.0);
        assert!((r.velocity.x + 4.0).abs() < 1e-5); // -5 * 0.8
        assert_eq!(r.velocity.y, 2.0);
    }

    #[test]
    fn test_boundary_clamps_both_axes() {
        let course = course_with(Vec::new());
        let r = resolve(Vec2::new(-10.0, 620.0), Vec2::new(-3.0, 4.0), &course, &profile());
        assert_eq!(r.position, Vec2::new(20.0, 580.0));
        assert!((r.velocity.x - 2.4).abs() < 1e-5);
        assert!((r.velocity.y + 3.2).abs() < 1e-5);
    }

    #[test]
    fn test_wall_forces_outward_on_nearest_edge() {
        let wall = Obstacle::new(ObstacleKind::Wall, Vec2::new(200.0, 200.0), Vec2::new(20.0, 100.0));
        let course = course_with(vec![wall]);
        // Ball just inside the left edge, nearer the top edge than the bottom
        let r = resolve(Vec2::new(203.0, 240.0), Vec2::new(5.0, 1.0), &course, &profile());
        assert!(r.velocity.x < 0.0, "x must flip outward, got {}", r.velocity.x);
        // Nearer the top edge than the bottom at y=250 (top 200, bottom 300)
        assert!(r.velocity.y < 0.0, "y must point toward the nearer edge");
    }

    #[test]
    fn test_wall_can_flip_both_axes() {
        let wall = Obstacle::new(ObstacleKind::Wall, Vec2::new(200.0, 200.0), Vec2::new(100.0, 100.0));
        let course = course_with(vec![wall]);
        // Near the far corner, moving up-left: both components forced positive
        let r = resolve(Vec2::new(295.0, 295.0), Vec2::new(-4.0, -4.0), &course, &profile());
        assert!(r.velocity.x > 0.0);
        assert!(r.velocity.y > 0.0);
    }

    #[test]
    fn test_sand_damps_before_next_friction_pass() {
        let sand = Obstacle::new(ObstacleKind::Sand, Vec2::new(300.0, 300.0), Vec2::new(150.0, 150.0));
        let course = course_with(vec![sand]);
        let r = resolve(Vec2::new(350.0, 350.0), Vec2::new(10.0, 0.0), &course, &profile());
        assert!((r.velocity.x - 7.0).abs() < 1e-5);
        assert_eq!(r.velocity.y, 0.0);
    }

    #[test]
    fn test_water_resets_regardless_of_speed() {
        let water = Obstacle::new(ObstacleKind::Water, Vec2::new(350.0, 250.0), Vec2::new(200.0, 100.0));
        let course = course_with(vec![water]);
        for speed in [0.5_f32, 8.0, 500.0] {
            let r = resolve(Vec2::new(400.0, 300.0), Vec2::new(speed, -speed), &course, &profile());
            assert_eq!(r.position, course.start);
            assert_eq!(r.velocity, Vec2::ZERO);
            assert!(r.at_rest);
            assert_eq!(r.side_effect, SideEffect::ResetToStart);
        }
    }

    #[test]
    fn test_bumper_amplifies_and_redirects_radially() {
        let bumper = Obstacle::new(ObstacleKind::Bumper, Vec2::new(200.0, 200.0), Vec2::new(30.0, 30.0));
        let center = bumper.center();
        let course = course_with(vec![bumper]);
        // Ball inside the bumper, offset up-right of its center
        let pos = Vec2::new(225.0, 205.0);
        let vel = Vec2::new(-3.0, 4.0);
        let r = resolve(pos, vel, &course, &profile());
        assert!((r.velocity.length() - vel.length() * 1.5).abs() < 1e-4);
        // Outgoing velocity points strictly away from the bumper center
        let away = (pos - center).normalize();
        let out = r.velocity.normalize();
        assert!(away.dot(out) > 0.999, "kick must be radial, got {out:?} vs {away:?}");
    }

    #[test]
    fn test_first_declared_obstacle_wins_overlap() {
        let sand = Obstacle::new(ObstacleKind::Sand, Vec2::new(300.0, 300.0), Vec2::new(100.0, 100.0));
        let water = Obstacle::new(ObstacleKind::Water, Vec2::new(300.0, 300.0), Vec2::new(100.0, 100.0));
        let course = course_with(vec![sand.clone(), water.clone()]);
        let r = resolve(Vec2::new(350.0, 350.0), Vec2::new(10.0, 0.0), &course, &profile());
        // Sand declared first: damped, not reset
        assert!((r.velocity.x - 7.0).abs() < 1e-5);
        assert_eq!(r.side_effect, SideEffect::None);

        let flipped = course_with(vec![water, sand]);
        let r = resolve(Vec2::new(350.0, 350.0), Vec2::new(10.0, 0.0), &flipped, &profile());
        assert_eq!(r.side_effect, SideEffect::ResetToStart);
    }

    #[test]
    fn test_scenery_kinds_pass_through() {
        for kind in [
            ObstacleKind::MovingPlatform,
            ObstacleKind::Windmill,
            ObstacleKind::Bridge,
            ObstacleKind::Loop,
        ] {
            let obs = Obstacle::new(kind, Vec2::new(300.0, 300.0), Vec2::new(100.0, 100.0));
            let course = course_with(vec![obs]);
            let r = resolve(Vec2::new(350.0, 350.0), Vec2::new(5.0, -5.0), &course, &profile());
            assert_eq!(r.velocity, Vec2::new(5.0, -5.0), "{kind:?} must not alter velocity");
        }
    }

    #[test]
    fn test_rest_below_epsilon() {
        let course = course_with(Vec::new());
        let r = resolve(Vec2::new(400.0, 300.0), Vec2::new(0.05, 0.05), &course, &profile());
        assert_eq!(r.velocity, Vec2::ZERO);
        assert!(r.at_rest);
    }

    #[test]
    fn test_non_finite_velocity_degrades_to_rest() {
        let course = course_with(Vec::new());
        let r = resolve(Vec2::new(400.0, 300.0), Vec2::new(f32::NAN, 0.0), &course, &profile());
        assert_eq!(r.position, course.start);
        assert!(r.at_rest);
    }
}
