//! Breakout entry point
//!
//! Headless host: frames are reported through the log, key commands are read
//! from stdin one per line (`+ArrowLeft` presses, `-ArrowLeft` releases).

use std::io::BufRead;
use std::sync::mpsc::Sender;

use breakout::consts::{DEFAULT_STAGE_HEIGHT, DEFAULT_STAGE_WIDTH};
use breakout::{
    ConfigError, ControlsConfig, GameConfig, GameLoop, Key, KeyEvent, LogSink, Stage, SystemClock,
};

const CONFIG_ENV_VAR: &str = "BREAKOUT_CONFIG";

fn main() {
    env_logger::init();
    log::info!("Breakout (headless) starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ConfigError> {
    let config = load_config()?;
    let sink = LogSink::new(Stage::new(DEFAULT_STAGE_WIDTH, DEFAULT_STAGE_HEIGHT));
    let mut game = GameLoop::new(config, SystemClock::new(), sink)?;

    let controls = game.config().controls.clone();
    let keys = game.key_sender();
    std::thread::spawn(move || read_commands(controls, keys));

    game.run()
}

/// Config path from the first argument, then the environment, else defaults
fn load_config() -> Result<GameConfig, ConfigError> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV_VAR).ok());
    match path {
        Some(path) => GameConfig::load(path),
        None => {
            log::info!("Using default config");
            Ok(GameConfig::default())
        }
    }
}

fn read_commands(controls: ControlsConfig, keys: Sender<KeyEvent>) {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let Some(event) = parse_command(line.trim(), &controls) else {
            log::warn!("Ignoring command {:?}", line);
            continue;
        };
        if keys.send(event).is_err() {
            break;
        }
    }
}

fn parse_command(command: &str, controls: &ControlsConfig) -> Option<KeyEvent> {
    if let Some(name) = command.strip_prefix('+') {
        Some(KeyEvent::Pressed(Key::from_name(name, controls)))
    } else {
        command
            .strip_prefix('-')
            .map(|name| KeyEvent::Released(Key::from_name(name, controls)))
    }
}
