//! Kinematic step
//!
//! Forward Euler with an empirical per-tick friction factor. The factor is
//! applied once per call rather than scaled by dt: both presentation
//! variants run a fixed cadence (one canvas frame, or 1/60 s in the scene),
//! so per-tick decay matches the tuned gameplay feel. A caller with a
//! variable tick rate must fix its step size before calling this.

use glam::Vec2;

use super::profile::PhysicsProfile;

/// Advance position and velocity by one tick.
///
/// Pure: no obstacle or boundary knowledge, no shared state. The resolver
/// corrects the proposal afterwards.
#[inline]
pub fn step(position: Vec2, velocity: Vec2, dt: f32, profile: &PhysicsProfile) -> (Vec2, Vec2) {
    let proposed_position = position + velocity * dt;
    let proposed_velocity = velocity * profile.friction_factor;
    (proposed_position, proposed_velocity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_advances_by_velocity() {
        let profile = PhysicsProfile::canvas();
        let (pos, _) = step(Vec2::new(100.0, 100.0), Vec2::new(5.0, -3.0), 1.0, &profile);
        assert_eq!(pos, Vec2::new(105.0, 97.0));
    }

    #[test]
    fn test_friction_per_tick_not_dt_scaled() {
        let profile = PhysicsProfile::canvas();
        let vel = Vec2::new(10.0, 0.0);
        let (_, v_frame) = step(Vec2::ZERO, vel, 1.0, &profile);
        let (_, v_secs) = step(Vec2::ZERO, vel, 1.0 / 60.0, &profile);
        // Same decay regardless of dt
        assert_eq!(v_frame, v_secs);
        assert!((v_frame.x - 9.8).abs() < 1e-5);
    }

    #[test]
    fn test_zero_velocity_is_fixed_point() {
        let profile = PhysicsProfile::scene();
        let start = Vec2::new(3.0, 4.0);
        let (pos, vel) = step(start, Vec2::ZERO, 1.0 / 60.0, &profile);
        assert_eq!(pos, start);
        assert_eq!(vel, Vec2::ZERO);
    }

    #[test]
    fn test_speed_strictly_decreases() {
        let profile = PhysicsProfile::canvas();
        let mut vel = Vec2::new(8.0, -6.0);
        for _ in 0..50 {
            let before = vel.length();
            (_, vel) = step(Vec2::ZERO, vel, 1.0, &profile);
            assert!(vel.length() < before);
        }
    }
}
