//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through the tick's delta
//! - No randomness
//! - Stable brick order (row-major creation order)
//! - No rendering or platform dependencies

pub mod bricks;
pub mod collision;
pub mod state;
pub mod tick;

pub use bricks::create_bricks;
pub use collision::{
    is_brick_collision, is_ceiling_collision, is_floor_collision, is_paddle_hit,
    is_wall_collision, paddle_baseline,
};
pub use state::{Ball, Brick, Collisions, GameState, Stage};
pub use tick::step;
