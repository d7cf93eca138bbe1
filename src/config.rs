//! Game configuration
//!
//! One immutable value handed to every component at construction. Loaded from
//! JSON by the host; any field left out falls back to the defaults in
//! [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Stage;

/// Errors raised while loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("brick grid needs at least one column")]
    ZeroColumns,
    #[error("brick grid of {rows}x{columns} is too large")]
    GridTooLarge { rows: u32, columns: u32 },
    #[error("{name} must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("paddle width {paddle} does not fit on a stage {stage} wide")]
    PaddleTooWide { paddle: f32, stage: f32 },
    #[error("bricks would be {width} wide on a stage {stage} wide")]
    BricksTooNarrow { width: f32, stage: f32 },
    #[error("no key bound to {0}")]
    UnboundDirection(&'static str),
}

/// Key names bound to each paddle direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub left: Vec<String>,
    pub right: Vec<String>,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            left: vec!["ArrowLeft".to_string()],
            right: vec!["ArrowRight".to_string()],
        }
    }
}

/// Tunable sizes, speeds and grid dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Pixels per second at full intent
    pub paddle_speed: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Multiplier applied to the ball's direction vector per second
    pub ball_speed: f32,

    // === Bricks ===
    pub brick_rows: u32,
    pub brick_columns: u32,
    pub brick_height: f32,
    pub brick_gap: f32,
    pub brick_top_offset: f32,

    // === Timing ===
    pub tick_interval_ms: u64,
    pub restart_delay_ms: u64,

    pub controls: ControlsConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,

            brick_rows: BRICK_ROWS,
            brick_columns: BRICK_COLUMNS,
            brick_height: BRICK_HEIGHT,
            brick_gap: BRICK_GAP,
            brick_top_offset: BRICK_TOP_OFFSET,

            tick_interval_ms: TICK_INTERVAL_MS,
            restart_delay_ms: RESTART_DELAY_MS,

            controls: ControlsConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse a configuration from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Width of a single brick on the given stage
    pub fn brick_width(&self, stage: Stage) -> f32 {
        let columns = self.brick_columns as f32;
        (stage.width - self.brick_gap - self.brick_gap * columns) / columns
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self, stage: Stage) -> Result<(), ConfigError> {
        positive("stage width", stage.width as f64)?;
        positive("stage height", stage.height as f64)?;
        positive("paddle width", self.paddle_width as f64)?;
        positive("paddle height", self.paddle_height as f64)?;
        positive("paddle speed", self.paddle_speed as f64)?;
        positive("ball radius", self.ball_radius as f64)?;
        positive("ball speed", self.ball_speed as f64)?;
        positive("brick height", self.brick_height as f64)?;
        positive("tick interval", self.tick_interval_ms as f64)?;
        if !self.brick_gap.is_finite() || self.brick_gap < 0.0 {
            return Err(ConfigError::NotPositive {
                name: "brick gap",
                value: self.brick_gap as f64,
            });
        }

        if self.brick_columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        match self.brick_rows.checked_mul(self.brick_columns) {
            Some(count) if count <= MAX_BRICKS => {}
            _ => {
                return Err(ConfigError::GridTooLarge {
                    rows: self.brick_rows,
                    columns: self.brick_columns,
                });
            }
        }
        if self.paddle_width > stage.width {
            return Err(ConfigError::PaddleTooWide {
                paddle: self.paddle_width,
                stage: stage.width,
            });
        }
        let width = self.brick_width(stage);
        if width <= 0.0 {
            return Err(ConfigError::BricksTooNarrow {
                width,
                stage: stage.width,
            });
        }

        if self.controls.left.is_empty() {
            return Err(ConfigError::UnboundDirection("left"));
        }
        if self.controls.right.is_empty() {
            return Err(ConfigError::UnboundDirection("right"));
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}
