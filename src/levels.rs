//! Built-in course catalog
//!
//! Ten authored holes in canvas units on the standard 800x600 board, from
//! the beginner green up to the gauntlet. External tools can author their
//! own courses as JSON and load them with [`LevelConfig::from_json`]; the
//! session accepts any well-formed config.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Bounds, Course, Obstacle, ObstacleKind};

/// Standard board extents (canvas units)
pub const BOARD_WIDTH: f32 = 800.0;
pub const BOARD_HEIGHT: f32 = 600.0;
/// Tee and cup shared by the catalog holes
const START: Vec2 = Vec2::new(50.0, 500.0);
const HOLE: Vec2 = Vec2::new(750.0, 100.0);
/// Cup capture radius on the canvas board
const HOLE_RADIUS: f32 = 20.0;

/// One authored level: display metadata plus the playable course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelConfig {
    pub name: String,
    pub difficulty: u8,
    pub course: Course,
}

impl LevelConfig {
    /// Parse an externally-authored level file
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn obstacle(kind: ObstacleKind, x: f32, y: f32, w: f32, h: f32) -> Obstacle {
    Obstacle::new(kind, Vec2::new(x, y), Vec2::new(w, h))
}

fn hole(name: &str, par: u32, difficulty: u8, obstacles: Vec<Obstacle>) -> LevelConfig {
    LevelConfig {
        name: name.to_string(),
        difficulty,
        course: Course {
            start: START,
            hole: HOLE,
            hole_radius: HOLE_RADIUS,
            bounds: Bounds::new(Vec2::ZERO, Vec2::new(BOARD_WIDTH, BOARD_HEIGHT)),
            obstacles,
            par,
        },
    }
}

/// The ten built-in holes, in play order
pub fn catalog() -> Vec<LevelConfig> {
    use ObstacleKind::*;
    vec![
        hole("First Tee", 2, 1, vec![]),
        hole(
            "Gentle Curve",
            3,
            1,
            vec![obstacle(Wall, 350.0, 200.0, 20.0, 200.0)],
        ),
        hole(
            "Sand Trap",
            3,
            2,
            vec![
                obstacle(Sand, 300.0, 300.0, 150.0, 150.0),
                obstacle(Wall, 200.0, 200.0, 20.0, 100.0),
            ],
        ),
        hole(
            "Water Hazard",
            4,
            2,
            vec![
                obstacle(Water, 350.0, 250.0, 200.0, 100.0),
                obstacle(Bridge, 400.0, 280.0, 100.0, 40.0),
            ],
        ),
        hole(
            "Moving Platform",
            4,
            3,
            vec![
                obstacle(MovingPlatform, 300.0, 300.0, 100.0, 20.0),
                obstacle(Wall, 500.0, 150.0, 20.0, 200.0),
            ],
        ),
        hole(
            "Double Dogleg",
            5,
            3,
            vec![
                obstacle(Wall, 200.0, 300.0, 150.0, 20.0),
                obstacle(Wall, 450.0, 200.0, 150.0, 20.0),
                obstacle(Sand, 300.0, 350.0, 100.0, 100.0),
            ],
        ),
        hole(
            "Windmill",
            4,
            3,
            vec![obstacle(Windmill, 400.0, 300.0, 100.0, 100.0)],
        ),
        hole(
            "Loop-de-Loop",
            5,
            4,
            vec![obstacle(Loop, 300.0, 200.0, 200.0, 200.0)],
        ),
        hole(
            "Pinball Madness",
            6,
            4,
            vec![
                obstacle(Bumper, 200.0, 200.0, 30.0, 30.0),
                obstacle(Bumper, 300.0, 300.0, 30.0, 30.0),
                obstacle(Bumper, 500.0, 250.0, 30.0, 30.0),
                obstacle(Bumper, 400.0, 400.0, 30.0, 30.0),
            ],
        ),
        hole(
            "The Gauntlet",
            7,
            5,
            vec![
                obstacle(Wall, 150.0, 200.0, 20.0, 200.0),
                obstacle(MovingPlatform, 250.0, 300.0, 80.0, 20.0),
                obstacle(Water, 400.0, 350.0, 150.0, 100.0),
                obstacle(Windmill, 550.0, 200.0, 80.0, 80.0),
                obstacle(Sand, 300.0, 150.0, 100.0, 100.0),
            ],
        ),
    ]
}

/// Look up a catalog hole by its 1-based number
pub fn by_number(number: usize) -> Option<LevelConfig> {
    if number == 0 {
        return None;
    }
    catalog().into_iter().nth(number - 1)
}
