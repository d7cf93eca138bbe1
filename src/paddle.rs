//! Paddle position integrated over ticks

use crate::clock::Tick;
use crate::config::GameConfig;
use crate::input::Intent;
use crate::sim::Stage;

/// Horizontal paddle position, clamped to the stage
#[derive(Debug, Clone, PartialEq)]
pub struct PaddleIntegrator {
    position: f32,
    min_x: f32,
    max_x: f32,
    speed: f32,
}

impl PaddleIntegrator {
    /// Paddle centered on the stage
    pub fn new(config: &GameConfig, stage: Stage) -> Self {
        let half = config.paddle_width / 2.0;
        Self {
            position: stage.width / 2.0,
            min_x: half,
            max_x: stage.width - half,
            speed: config.paddle_speed,
        }
    }

    /// Latest paddle center
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Advance by one tick; returns the new position only if it moved
    pub fn advance(&mut self, tick: &Tick, intent: Intent) -> Option<f32> {
        let next = self.position + intent.direction() * tick.delta_time * self.speed;
        let next = next.min(self.max_x).max(self.min_x);
        if next == self.position {
            return None;
        }
        self.position = next;
        Some(next)
    }
}
