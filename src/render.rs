//! Render sink boundary
//!
//! Drawing lives outside the engine. A sink is asked for the stage once, then
//! receives one finished frame per tick and the lifecycle overlays. Nothing
//! flows back into the simulation.

use crate::game_loop::Frame;
use crate::sim::Stage;

/// Consumer of finished frames
pub trait RenderSink {
    /// Stage dimensions, queried once when the loop is built
    fn stage(&self) -> Stage;

    /// Called at the start of every session, before its first frame
    fn draw_intro(&mut self);

    /// Clear and redraw everything; called once per tick
    fn draw_frame(&mut self, frame: &Frame<'_>);

    /// Terminal overlay for the current session
    fn draw_game_over(&mut self, message: &str);
}

/// Headless sink that reports through the `log` facade
#[derive(Debug, Clone)]
pub struct LogSink {
    stage: Stage,
    last_score: Option<u64>,
    frames: u64,
}

impl LogSink {
    pub fn new(stage: Stage) -> Self {
        Self {
            stage,
            last_score: None,
            frames: 0,
        }
    }

    /// Frames drawn since creation
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderSink for LogSink {
    fn stage(&self) -> Stage {
        self.stage
    }

    fn draw_intro(&mut self) {
        log::info!(
            "Press left/right to move the paddle ({}x{} stage)",
            self.stage.width,
            self.stage.height
        );
        self.last_score = None;
    }

    fn draw_frame(&mut self, frame: &Frame<'_>) {
        self.frames += 1;
        let state = frame.state;
        log::trace!(
            "t={:.0}ms paddle={:.1} ball=({:.1}, {:.1}) bricks={}",
            frame.tick.time_ms,
            frame.paddle,
            state.ball.position.x,
            state.ball.position.y,
            state.bricks.len()
        );
        if self.last_score != Some(state.score) {
            log::info!("Score: {}", state.score);
            self.last_score = Some(state.score);
        }
    }

    fn draw_game_over(&mut self, message: &str) {
        log::info!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::config::GameConfig;
    use crate::game_loop::GameLoop;

    #[test]
    fn test_log_sink_counts_frames() {
        let sink = LogSink::new(Stage::new(640.0, 480.0));
        let mut game = GameLoop::new(GameConfig::default(), ManualClock::new(), sink).unwrap();
        assert_eq!(game.stage(), Stage::new(640.0, 480.0));

        game.run_for(25);
        assert_eq!(game.sink().frames(), 25);
    }
}
