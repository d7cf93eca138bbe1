//! Collision predicates
//!
//! All tests are axis-aligned. The brick test probes one raw direction step
//! ahead of the ball, unscaled by time or speed.

use super::state::{Ball, Brick, Stage};
use crate::config::GameConfig;

/// Ball's probe point lies inside the brick
pub fn is_brick_collision(brick: &Brick, ball: &Ball) -> bool {
    brick.contains(ball.position + ball.direction)
}

/// Ball is inside the paddle's band and below the paddle baseline
///
/// Does not look at the ball's vertical direction: a ball lingering in the
/// band registers a hit every tick.
pub fn is_paddle_hit(paddle: f32, ball: &Ball, config: &GameConfig, stage: Stage) -> bool {
    let half = config.paddle_width / 2.0;
    ball.position.x > paddle - half
        && ball.position.x < paddle + half
        && ball.position.y > paddle_baseline(config, stage)
}

/// y past which the ball counts as touching the paddle
pub fn paddle_baseline(config: &GameConfig, stage: Stage) -> f32 {
    stage.height - config.paddle_height - config.ball_radius / 2.0
}

/// Ball is outside the horizontal play band
pub fn is_wall_collision(ball: &Ball, config: &GameConfig, stage: Stage) -> bool {
    ball.position.x < config.ball_radius || ball.position.x > stage.width - config.ball_radius
}

pub fn is_ceiling_collision(ball: &Ball, config: &GameConfig) -> bool {
    ball.position.y < config.ball_radius
}

/// Ball has dropped past the floor line
pub fn is_floor_collision(ball: &Ball, config: &GameConfig, stage: Stage) -> bool {
    ball.position.y > stage.height - config.ball_radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn stage() -> Stage {
        Stage::new(800.0, 600.0)
    }

    fn ball(x: f32, y: f32) -> Ball {
        Ball {
            position: Vec2::new(x, y),
            direction: Vec2::new(2.0, 2.0),
        }
    }

    #[test]
    fn test_brick_collision_uses_raw_direction() {
        let brick = Brick {
            x: 100.0,
            y: 100.0,
            width: 40.0,
            height: 20.0,
        };
        // Ball itself is outside, one direction step ahead is inside
        let b = ball(79.0, 89.0);
        assert!(!brick.contains(b.position));
        assert!(is_brick_collision(&brick, &b));

        assert!(!is_brick_collision(&brick, &ball(70.0, 100.0)));
    }

    #[test]
    fn test_paddle_hit_at_baseline() {
        let config = GameConfig::default();
        assert_eq!(paddle_baseline(&config, stage()), 575.0);
        assert!(is_paddle_hit(400.0, &ball(420.0, 576.0), &config, stage()));
        // Exactly on the baseline is not yet past it
        assert!(!is_paddle_hit(400.0, &ball(420.0, 575.0), &config, stage()));
    }

    #[test]
    fn test_paddle_miss_outside_band() {
        let config = GameConfig::default();
        assert!(!is_paddle_hit(400.0, &ball(451.0, 580.0), &config, stage()));
        assert!(!is_paddle_hit(400.0, &ball(349.0, 580.0), &config, stage()));
        assert!(!is_paddle_hit(400.0, &ball(400.0, 500.0), &config, stage()));
    }

    #[test]
    fn test_paddle_hit_ignores_direction() {
        let config = GameConfig::default();
        let mut b = ball(400.0, 585.0);
        b.direction.y = -2.0;
        assert!(is_paddle_hit(400.0, &b, &config, stage()));
    }

    #[test]
    fn test_walls() {
        let config = GameConfig::default();
        assert!(is_wall_collision(&ball(9.0, 300.0), &config, stage()));
        assert!(is_wall_collision(&ball(791.0, 300.0), &config, stage()));
        assert!(!is_wall_collision(&ball(10.0, 300.0), &config, stage()));
        assert!(!is_wall_collision(&ball(790.0, 300.0), &config, stage()));
    }

    #[test]
    fn test_ceiling_and_floor() {
        let config = GameConfig::default();
        assert!(is_ceiling_collision(&ball(400.0, 9.0), &config));
        assert!(!is_ceiling_collision(&ball(400.0, 10.0), &config));
        assert!(is_floor_collision(&ball(400.0, 590.5), &config, stage()));
        assert!(!is_floor_collision(&ball(400.0, 590.0), &config, stage()));
    }
}
