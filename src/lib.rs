//! # Tilehop
//!
//! A small side-scrolling platformer built on tile-based rooms.
//!
//! ## Architecture Overview
//!
//! - **Generation**: fixed ASCII level descriptors and the tile grid parser
//!   that turns them into positioned entities
//! - **Game**: geometry, entity models, the per-tick physics resolver, the
//!   two-room state machine and the session context that ties them together
//! - **Input**: per-frame keyboard sampling into an explicit input state
//! - **Rendering**: a pure draw list plus a macroquad display that rasterises it
//!
//! The loop driver in `main.rs` owns the single [`GameSession`] and passes it
//! to each subsystem in turn; nothing else holds on to it between ticks.

pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;
pub mod utils;

pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;
pub use utils::*;

/// Core error type for the tilehop runtime.
///
/// Gameplay itself never fails; these cover the ambient plumbing around it.
#[derive(thiserror::Error, Debug)]
pub enum PlatformerError {
    /// A global logger was already installed
    #[error("Logging error: {0}")]
    Logging(#[from] log::SetLoggerError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Runtime state or setting is invalid
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the tilehop codebase.
pub type PlatformerResult<T> = Result<T, PlatformerError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Logical viewport width
    pub const SCREEN_WIDTH: i32 = 800;

    /// Logical viewport height, also the floor fallback line
    pub const SCREEN_HEIGHT: i32 = 600;

    /// Window caption
    pub const WINDOW_TITLE: &str = "Platformer";

    /// Frames per second target for the game loop
    pub const TARGET_FPS: u32 = 60;

    /// Upper bound on catch-up ticks run in a single rendered frame
    pub const MAX_TICKS_PER_FRAME: u32 = 5;

    /// Edge length of a level tile
    pub const TILE_SIZE: i32 = 32;

    /// Vertical speed applied on the first falling frame after a stop
    pub const INITIAL_FALL_SPEED: f32 = 1.0;

    /// Per-frame downward acceleration
    pub const GRAVITY: f32 = 0.35;

    /// Vertical velocity set by a jump
    pub const JUMP_VELOCITY: f32 = -10.0;

    /// Horizontal player speed while a direction is held
    pub const MOVE_SPEED: i32 = 5;

    /// Initial horizontal enemy speed
    pub const ENEMY_SPEED: i32 = 2;

    /// Enemy patrol reach on either side of its spawn, in tiles
    pub const ENEMY_PATROL_TILES: i32 = 2;

    /// Player position before any level marker is applied
    pub const PLAYER_START: (i32, i32) = (50, SCREEN_HEIGHT - TILE_SIZE * 2);

    /// Where the player lands after entering room 2 through a door
    pub const ROOM2_SPAWN: (i32, i32) = (100, SCREEN_HEIGHT - TILE_SIZE * 10);
}
