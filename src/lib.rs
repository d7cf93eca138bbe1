//! Breakout - a paddle, a ball and a wall of bricks
//!
//! Core modules:
//! - `clock`: Tick source (wall clock or manual) and per-session tickers
//! - `input`: Key events to directional intent
//! - `paddle`: Paddle position integrated over ticks
//! - `sim`: Deterministic simulation (ball physics, collisions, score)
//! - `game_loop`: Frame orchestration and the game-over/restart cycle
//! - `render`: Render sink boundary
//! - `config`: Tunable game configuration

pub mod clock;
pub mod config;
pub mod game_loop;
pub mod input;
pub mod paddle;
pub mod render;
pub mod sim;

pub use clock::{Clock, ManualClock, SystemClock, Tick, Ticker};
pub use config::{ConfigError, ControlsConfig, GameConfig};
pub use game_loop::{Frame, GameLoop, GameOutcome};
pub use input::{InputMapper, Intent, Key, KeyEvent};
pub use paddle::PaddleIntegrator;
pub use render::{LogSink, RenderSink};
pub use sim::{Ball, Brick, Collisions, GameState, Stage};

/// Game configuration constants
pub mod consts {
    /// Tick interval in milliseconds (~60 Hz)
    pub const TICK_INTERVAL_MS: u64 = 17; // ceil(1000 / 60)
    /// Pause between game over and the fresh session
    pub const RESTART_DELAY_MS: u64 = 1000;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Pixels per second at full intent
    pub const PADDLE_SPEED: f32 = 240.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 60.0;
    /// Per-axis displacement of a fresh ball; only the signs ever change
    pub const BALL_DIRECTION: f32 = 2.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLUMNS: u32 = 7;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_GAP: f32 = 3.0;
    /// Space above the first row
    pub const BRICK_TOP_OFFSET: f32 = 20.0;
    /// Upper bound on rows * columns accepted from a config
    pub const MAX_BRICKS: u32 = 10_000;

    /// Points per destroyed brick
    pub const BRICK_SCORE: u64 = 10;

    /// Overlay text drawn on the terminal transition
    pub const GAME_OVER_MESSAGE: &str = "GAME OVER";

    /// Stage used by the headless host
    pub const DEFAULT_STAGE_WIDTH: f32 = 800.0;
    pub const DEFAULT_STAGE_HEIGHT: f32 = 600.0;
}
