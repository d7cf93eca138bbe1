//! Per-tick simulation step
//!
//! Advances the game state deterministically: no timers, no randomness, only
//! the previous state, the tick and the latest paddle position.

use super::collision::{
    is_brick_collision, is_ceiling_collision, is_paddle_hit, is_wall_collision,
};
use super::state::{Collisions, GameState, Stage};
use crate::clock::Tick;
use crate::config::GameConfig;
use crate::consts::BRICK_SCORE;

/// Advance the game state by one tick
pub fn step(state: &mut GameState, tick: &Tick, paddle: f32, config: &GameConfig, stage: Stage) {
    let mut collisions = Collisions::default();
    let ball = &mut state.ball;

    ball.position += ball.direction * tick.delta_time * config.ball_speed;

    let before = state.bricks.len();
    state.bricks.retain(|brick| !is_brick_collision(brick, ball));
    let destroyed = before - state.bricks.len();
    if destroyed > 0 {
        collisions.brick = true;
        state.score += BRICK_SCORE * destroyed as u64;
        log::debug!(
            "Destroyed {} brick(s), {} left, score {}",
            destroyed,
            state.bricks.len(),
            state.score
        );
    }

    collisions.paddle = is_paddle_hit(paddle, ball, config, stage);

    if is_wall_collision(ball, config, stage) {
        ball.direction.x = -ball.direction.x;
        collisions.wall = true;
    }

    collisions.ceiling = is_ceiling_collision(ball, config);

    // The floor is not a reflector; the game loop ends the life there
    if collisions.brick || collisions.paddle || collisions.ceiling {
        ball.direction.y = -ball.direction.y;
    }

    state.collisions = collisions;
}
