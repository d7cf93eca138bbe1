//! Game state and core simulation types
//!
//! Everything the simulation fold carries from one tick to the next lives in
//! [`GameState`]; it is rebuilt from scratch on every (re)start.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bricks::create_bricks;
use crate::config::GameConfig;
use crate::consts::BALL_DIRECTION;

/// Fixed-size play area, queried once from the render sink
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub width: f32,
    pub height: f32,
}

impl Stage {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec2,
    /// Per-frame displacement; only the sign of each axis ever changes
    pub direction: Vec2,
}

impl Ball {
    /// Ball at the stage center heading down and to the right
    pub fn centered(stage: Stage) -> Self {
        Self {
            position: stage.center(),
            direction: Vec2::splat(BALL_DIRECTION),
        }
    }
}

/// A brick (center-based box)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Brick {
    /// Strict containment test against the brick's box
    pub fn contains(&self, point: Vec2) -> bool {
        (point.x - self.x).abs() < self.width / 2.0 && (point.y - self.y).abs() < self.height / 2.0
    }
}

/// Surfaces the ball touched during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Collisions {
    pub paddle: bool,
    /// Never set by the fold: reaching the floor is the loop's game-over check
    pub floor: bool,
    pub wall: bool,
    pub ceiling: bool,
    pub brick: bool,
}

/// Complete simulation state for one life
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    /// Surviving bricks in row-major creation order
    pub bricks: Vec<Brick>,
    pub score: u64,
    /// Collisions of the most recent tick
    pub collisions: Collisions,
}

impl GameState {
    /// Fresh state: centered ball, full brick grid, score 0
    pub fn new(config: &GameConfig, stage: Stage) -> Self {
        Self {
            ball: Ball::centered(stage),
            bricks: create_bricks(config, stage),
            score: 0,
            collisions: Collisions::default(),
        }
    }
}
