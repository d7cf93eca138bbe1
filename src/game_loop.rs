//! Frame orchestration and the game-over/restart cycle
//!
//! Each tick: drain pending key events, advance the paddle, fold the
//! simulation with the latest paddle position, hand the frame to the sink and
//! check for the ball dropping past the floor. Game over is a returned
//! [`GameOutcome`]; restarting waits the configured delay and rebuilds the
//! whole session, so nothing survives from the previous life.

use std::sync::mpsc::{self, Receiver, Sender};

use serde::{Deserialize, Serialize};

use crate::clock::{Clock, Tick, Ticker};
use crate::config::{ConfigError, GameConfig};
use crate::consts::GAME_OVER_MESSAGE;
use crate::input::{InputMapper, KeyEvent};
use crate::paddle::PaddleIntegrator;
use crate::render::RenderSink;
use crate::sim::{self, GameState, Stage};

/// One finished frame, handed to the render sink
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub tick: Tick,
    /// Latest paddle center
    pub paddle: f32,
    pub state: &'a GameState,
}

/// Result of advancing one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Continue,
    GameOver,
}

/// Everything owned by one life; dropped wholesale on restart
#[derive(Debug)]
struct Session {
    ticker: Ticker,
    input: InputMapper,
    paddle: PaddleIntegrator,
    state: GameState,
    introduced: bool,
    over: bool,
}

impl Session {
    fn new(config: &GameConfig, stage: Stage, clock: &impl Clock) -> Self {
        Self {
            ticker: Ticker::start(clock, config.tick_interval_ms),
            input: InputMapper::new(),
            paddle: PaddleIntegrator::new(config, stage),
            state: GameState::new(config, stage),
            introduced: false,
            over: false,
        }
    }
}

/// The game loop: clock, paddle and simulation wired into one frame sequence
pub struct GameLoop<C: Clock, S: RenderSink> {
    config: GameConfig,
    stage: Stage,
    clock: C,
    sink: S,
    keys_tx: Sender<KeyEvent>,
    keys_rx: Receiver<KeyEvent>,
    session: Session,
    /// Sessions started so far (1-based once the first frame is drawn)
    sessions: u64,
}

impl<C: Clock, S: RenderSink> GameLoop<C, S> {
    /// Query the stage from the sink and validate the configuration against it
    pub fn new(config: GameConfig, clock: C, sink: S) -> Result<Self, ConfigError> {
        let stage = sink.stage();
        config.validate(stage)?;

        let (keys_tx, keys_rx) = mpsc::channel();
        let session = Session::new(&config, stage, &clock);
        log::debug!(
            "Game loop ready: {}x{} stage, {}x{} bricks",
            stage.width,
            stage.height,
            config.brick_rows,
            config.brick_columns
        );

        Ok(Self {
            config,
            stage,
            clock,
            sink,
            keys_tx,
            keys_rx,
            session,
            sessions: 0,
        })
    }

    /// Sender for host input threads; events are applied before the next tick
    pub fn key_sender(&self) -> Sender<KeyEvent> {
        self.keys_tx.clone()
    }

    /// Queue a key event from the loop's own thread
    pub fn handle_key(&mut self, event: KeyEvent) {
        // The loop owns the receiver, so the channel cannot be disconnected
        let _ = self.keys_tx.send(event);
    }

    /// Advance one tick and draw the resulting frame
    ///
    /// Stepping a session that already ended restarts it first, the same as
    /// calling [`GameLoop::restart`].
    pub fn step(&mut self) -> GameOutcome {
        if self.session.over {
            self.restart();
        }
        let session = &mut self.session;

        if !session.introduced {
            self.sessions += 1;
            log::info!("Starting session {}", self.sessions);
            self.sink.draw_intro();
            session.introduced = true;
        }

        for event in self.keys_rx.try_iter() {
            if let Some(intent) = session.input.apply(event) {
                log::debug!("Intent changed to {:?}", intent);
            }
        }

        let tick = session.ticker.next_tick(&mut self.clock);
        session.paddle.advance(&tick, session.input.intent());
        let paddle = session.paddle.position();
        sim::step(&mut session.state, &tick, paddle, &self.config, self.stage);

        self.sink.draw_frame(&Frame {
            tick,
            paddle,
            state: &session.state,
        });

        if sim::is_floor_collision(&session.state.ball, &self.config, self.stage) {
            log::info!(
                "Game over: score {}, {} bricks left",
                session.state.score,
                session.state.bricks.len()
            );
            self.sink.draw_game_over(GAME_OVER_MESSAGE);
            session.over = true;
            return GameOutcome::GameOver;
        }
        GameOutcome::Continue
    }

    /// Wait out the restart delay and throw the current session away
    pub fn restart(&mut self) {
        self.clock.delay(self.config.restart_delay_ms);

        let dropped = self.keys_rx.try_iter().count();
        if dropped > 0 {
            log::debug!("Dropped {} key event(s) during restart", dropped);
        }
        self.session = Session::new(&self.config, self.stage, &self.clock);
    }

    /// Run a bounded number of ticks, restarting after each game over
    ///
    /// Returns how many games ended.
    pub fn run_for(&mut self, ticks: usize) -> usize {
        let mut game_overs = 0;
        for _ in 0..ticks {
            if self.step() == GameOutcome::GameOver {
                game_overs += 1;
            }
        }
        game_overs
    }

    /// Run until the process exits
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// State of the current session
    pub fn state(&self) -> &GameState {
        &self.session.state
    }

    /// Paddle center of the current session
    pub fn paddle(&self) -> f32 {
        self.session.paddle.position()
    }

    pub fn sessions(&self) -> u64 {
        self.sessions
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
