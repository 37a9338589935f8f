//! # Tilehop Main Entry Point
//!
//! Parses the command line, sets up logging and runs the fixed-rate game loop.

use clap::Parser;
use log::{debug, info, trace, LevelFilter};
use macroquad::prelude::{get_frame_time, next_frame, prevent_quit};
use std::str::FromStr;
use tilehop::config::{MAX_TICKS_PER_FRAME, TARGET_FPS};
use tilehop::{
    window_conf, FixedTimestep, GameEvent, GameSession, InputHandler, MacroquadDisplay,
    PlatformerError, PlatformerResult,
};

/// Command line arguments for tilehop.
#[derive(Parser, Debug)]
#[command(name = "tilehop")]
#[command(about = "A small tile-based side-scrolling platformer")]
#[command(version)]
struct Args {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[macroquad::main(window_conf)]
async fn main() -> PlatformerResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level)?;

    info!("Starting tilehop v{}", tilehop::VERSION);

    run_game().await
}

/// Initializes env_logger at the requested level. `RUST_LOG` still overrides it.
fn initialize_logging(log_level: &str) -> PlatformerResult<()> {
    let level = LevelFilter::from_str(log_level)
        .map_err(|_| PlatformerError::InvalidState(format!("Unknown log level: {}", log_level)))?;

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()?;

    Ok(())
}

/// Main game loop: sample input, run due ticks, draw.
async fn run_game() -> PlatformerResult<()> {
    // Window close becomes an input event instead of an immediate exit
    prevent_quit();

    let mut session = GameSession::new();
    let mut input_handler = InputHandler::new();
    let mut display = MacroquadDisplay::new();
    let mut timestep = FixedTimestep::new(TARGET_FPS, MAX_TICKS_PER_FRAME);

    while session.is_running() {
        let mut input = input_handler.poll();

        for _ in 0..timestep.advance(f64::from(get_frame_time())) {
            for event in session.update(&input) {
                if let GameEvent::GameOver { room } = event {
                    info!("Game over in {}", room);
                }
            }
            input.consume_edges();
            input_handler.consume();

            if !session.is_running() {
                break;
            }
        }

        display.render(&session);
        trace!(
            "Tick {}: drew {} rects",
            session.tick, display.last_frame_commands
        );

        next_frame().await;
    }

    info!(
        "Game loop ended: {:?} after {} ticks",
        session.completion, session.tick
    );
    debug!("Final state: {}", serde_json::to_string(&session.snapshot())?);

    Ok(())
}
