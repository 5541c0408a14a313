//! Putt demo entry point
//!
//! Headless autoplay across the built-in catalog: aims at the cup, charges
//! to full, shoots, and ticks the session until the ball settles or drops.
//! Useful for exercising the simulation without a renderer attached.
//!
//! Usage:
//!   putt-demo            play the whole catalog
//!   putt-demo 4          play catalog hole 4
//!   putt-demo hole.json  play an externally-authored level file

use glam::Vec2;

use putt_core::consts::FRAME_DT;
use putt_core::levels::{self, LevelConfig};
use putt_core::sim::{CourseSession, PhysicsProfile, SessionEvent, StrokePhase};

/// Give up on a hole after this many strokes (the demo aims naively)
const MAX_STROKES_PER_HOLE: u32 = 20;
/// Hard cap on ticks per stroke; no stroke legitimately runs this long
const MAX_TICKS_PER_STROKE: u32 = 10_000;

fn main() {
    env_logger::init();

    let levels = match std::env::args().nth(1) {
        None => levels::catalog(),
        Some(arg) => match select_levels(&arg) {
            Ok(levels) => levels,
            Err(msg) => {
                log::error!("{msg}");
                std::process::exit(2);
            }
        },
    };

    let mut session: Option<CourseSession> = None;
    let mut completed = 0usize;
    let total = levels.len();

    for level in levels {
        log::info!(
            "=== {} (par {}, difficulty {}) ===",
            level.name,
            level.course.par,
            level.difficulty
        );
        if let Some(s) = session.as_mut() {
            s.advance_level(level.course);
        } else {
            session = Some(CourseSession::new(level.course, PhysicsProfile::canvas()));
        }
        let s = session.as_mut().expect("session created above");
        if play_hole(s) {
            completed += 1;
            log::info!(
                "finished in {} strokes ({})",
                s.stroke().strokes,
                s.score().label()
            );
        } else {
            log::warn!("gave up after {} strokes", s.stroke().strokes);
        }
    }

    let total_strokes = session.map(|s| s.stroke().total_strokes).unwrap_or(0);
    log::info!("round over: {completed}/{total} holes, {total_strokes} total strokes");
}

fn select_levels(arg: &str) -> Result<Vec<LevelConfig>, String> {
    if let Ok(number) = arg.parse::<usize>() {
        return levels::by_number(number)
            .map(|l| vec![l])
            .ok_or_else(|| format!("no catalog hole {number} (valid: 1-10)"));
    }
    let json = std::fs::read_to_string(arg).map_err(|e| format!("cannot read {arg}: {e}"))?;
    let level = LevelConfig::from_json(&json).map_err(|e| format!("bad level file {arg}: {e}"))?;
    Ok(vec![level])
}

/// Shoot at the cup until it captures or the stroke budget runs out
fn play_hole(session: &mut CourseSession) -> bool {
    while session.stroke().strokes < MAX_STROKES_PER_HOLE {
        take_stroke(session);
        match settle(session) {
            StrokePhase::LevelComplete => return true,
            // Tick cap hit while still rolling; something is wedged
            StrokePhase::Rolling => return false,
            _ => continue,
        }
    }
    false
}

/// Aim at the hole (nudged a little on retries so the demo does not repeat
/// a blocked line forever), charge to full, and let the auto-release fire.
fn take_stroke(session: &mut CourseSession) {
    let to_hole = session.course().hole - session.ball().position;
    let nudge = match session.stroke().strokes % 3 {
        1 => 0.25,
        2 => -0.25,
        _ => 0.0,
    };
    let angle = to_hole.y.atan2(to_hole.x) + nudge;
    let aim = Vec2::new(angle.cos(), angle.sin());

    session.start_aiming();
    session.update_aim(aim);
    session.begin_charge();
    while session.phase() == StrokePhase::Charging {
        session.tick(FRAME_DT);
    }
}

/// Tick until the stroke resolves, reporting events as they drain
fn settle(session: &mut CourseSession) -> StrokePhase {
    let mut ticks = 0;
    while session.phase() == StrokePhase::Rolling && ticks < MAX_TICKS_PER_STROKE {
        session.tick(FRAME_DT);
        session.advance_animations(FRAME_DT / 60.0);
        for event in session.drain_events() {
            match event {
                SessionEvent::PositionChanged(pos) => {
                    log::trace!("ball at ({:.1}, {:.1})", pos.x, pos.y);
                }
                SessionEvent::StrokeTaken(n) => log::info!("stroke {n}"),
                SessionEvent::HoleReached => log::info!("in the cup!"),
                SessionEvent::RestReached => log::debug!("ball at rest"),
                SessionEvent::AimUpdated { .. } => {}
            }
        }
        ticks += 1;
    }
    session.phase()
}
