//! Simulation invariants under arbitrary tick and input histories

use breakout::sim::{self, GameState, Stage};
use breakout::{GameConfig, Intent, PaddleIntegrator, Tick};
use proptest::prelude::*;

fn stage() -> Stage {
    Stage::new(800.0, 600.0)
}

fn intent() -> impl Strategy<Value = Intent> {
    prop_oneof![Just(Intent::Left), Just(Intent::Idle), Just(Intent::Right)]
}

fn history(max: usize) -> impl Strategy<Value = Vec<(f32, Intent)>> {
    prop::collection::vec((0.0f32..0.25, intent()), 1..max)
}

/// Drive paddle and simulation together, yielding every intermediate state
fn replay(inputs: &[(f32, Intent)]) -> Vec<(f32, GameState)> {
    let config = GameConfig::default();
    let mut paddle = PaddleIntegrator::new(&config, stage());
    let mut state = GameState::new(&config, stage());
    let mut out = Vec::with_capacity(inputs.len());
    for (i, &(dt, intent)) in inputs.iter().enumerate() {
        let tick = Tick::with_delta(i as f64 * 17.0, dt);
        paddle.advance(&tick, intent);
        sim::step(&mut state, &tick, paddle.position(), &config, stage());
        out.push((paddle.position(), state.clone()));
    }
    out
}

proptest! {
    #[test]
    fn paddle_stays_on_stage(inputs in history(400)) {
        let config = GameConfig::default();
        let mut paddle = PaddleIntegrator::new(&config, stage());
        for (dt, intent) in inputs {
            paddle.advance(&Tick::with_delta(0.0, dt), intent);
            prop_assert!(paddle.position() >= 50.0);
            prop_assert!(paddle.position() <= 750.0);
        }
    }

    #[test]
    fn bricks_only_shrink_and_score_matches(inputs in history(300)) {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, stage());
        let mut paddle = PaddleIntegrator::new(&config, stage());
        for (dt, intent) in inputs {
            let before = state.clone();
            let tick = Tick::with_delta(0.0, dt);
            paddle.advance(&tick, intent);
            sim::step(&mut state, &tick, paddle.position(), &config, stage());

            prop_assert!(state.bricks.len() <= before.bricks.len());
            let removed = (before.bricks.len() - state.bricks.len()) as u64;
            prop_assert_eq!(state.score, before.score + 10 * removed);
            prop_assert_eq!(state.collisions.brick, removed > 0);
            // Survivors keep their order and are never altered
            prop_assert!(state.bricks.iter().all(|b| before.bricks.contains(b)));
        }
    }

    #[test]
    fn direction_flips_only_on_triggers(inputs in history(300)) {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, stage());
        let mut paddle = PaddleIntegrator::new(&config, stage());
        for (dt, intent) in inputs {
            let before = state.ball.direction;
            let tick = Tick::with_delta(0.0, dt);
            paddle.advance(&tick, intent);
            sim::step(&mut state, &tick, paddle.position(), &config, stage());

            let after = state.ball.direction;
            let c = state.collisions;
            prop_assert_eq!(after.x.abs(), 2.0);
            prop_assert_eq!(after.y.abs(), 2.0);
            prop_assert_eq!(after.x != before.x, c.wall);
            prop_assert_eq!(after.y != before.y, c.brick || c.paddle || c.ceiling);
            prop_assert!(!c.floor);
        }
    }

    #[test]
    fn identical_histories_are_deterministic(inputs in history(300)) {
        prop_assert_eq!(replay(&inputs), replay(&inputs));
    }
}
