//! Tick source
//!
//! A [`Clock`] only tells time and waits. Each game session subscribes its own
//! [`Ticker`] to it, so a restart starts a fresh delta sequence while the
//! clock itself keeps running.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// One discrete time step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Milliseconds since the clock's origin
    pub time_ms: f64,
    /// Seconds elapsed since the previous tick of the same ticker (0 on the first)
    pub delta_time: f32,
}

impl Tick {
    /// A tick with a given delta, for driving the simulation directly
    pub fn with_delta(time_ms: f64, delta_time: f32) -> Self {
        Self { time_ms, delta_time }
    }
}

/// Time source for the game loop
pub trait Clock {
    /// Current time in milliseconds, monotonic
    fn now_ms(&self) -> f64;

    /// Suspend until `deadline_ms` has been reached
    fn wait_until(&mut self, deadline_ms: f64);

    /// Suspend for `delay_ms` from now
    fn delay(&mut self, delay_ms: u64) {
        let deadline = self.now_ms() + delay_ms as f64;
        self.wait_until(deadline);
    }
}

/// Wall clock that sleeps the thread until each deadline
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    fn wait_until(&mut self, deadline_ms: f64) {
        let remaining = deadline_ms - self.now_ms();
        if remaining > 0.0 {
            std::thread::sleep(Duration::from_secs_f64(remaining / 1000.0));
        }
    }
}

/// Deterministic clock: waiting jumps straight to the deadline
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: f64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward without waiting on anything
    pub fn advance(&mut self, ms: f64) {
        self.now_ms += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn wait_until(&mut self, deadline_ms: f64) {
        if deadline_ms > self.now_ms {
            self.now_ms = deadline_ms;
        }
    }
}

/// A subscription to a clock producing ticks at a fixed interval
#[derive(Debug, Clone)]
pub struct Ticker {
    interval_ms: f64,
    next_deadline_ms: f64,
    previous_ms: Option<f64>,
}

impl Ticker {
    /// Subscribe to `clock`; the first tick fires one interval from now
    pub fn start(clock: &impl Clock, interval_ms: u64) -> Self {
        let interval_ms = interval_ms as f64;
        Self {
            interval_ms,
            next_deadline_ms: clock.now_ms() + interval_ms,
            previous_ms: None,
        }
    }

    /// Wait for the next tick
    pub fn next_tick(&mut self, clock: &mut impl Clock) -> Tick {
        clock.wait_until(self.next_deadline_ms);
        let now = clock.now_ms();

        let delta_time = match self.previous_ms {
            Some(previous) => ((now - previous) / 1000.0) as f32,
            None => 0.0,
        };
        self.previous_ms = Some(now);

        // Missed deadlines are dropped rather than replayed in a burst
        self.next_deadline_ms += self.interval_ms;
        if self.next_deadline_ms < now {
            self.next_deadline_ms = now + self.interval_ms;
        }

        Tick {
            time_ms: now,
            delta_time,
        }
    }
}
