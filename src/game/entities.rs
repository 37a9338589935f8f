//! # Entity Models
//!
//! The player singleton and the closed set of room entities.
//!
//! Room contents are a fixed, small set of kinds, so they are modelled as a
//! single [`Entity`] enum and dispatched with `match` rather than through
//! trait objects.

use crate::config::{
    ENEMY_PATROL_TILES, ENEMY_SPEED, JUMP_VELOCITY, MOVE_SPEED, PLAYER_START, TILE_SIZE,
};
use crate::game::{Position, Rect};
use serde::{Deserialize, Serialize};

/// The player character.
///
/// Created once per session and moved, never recreated, on room transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Bounding box
    pub rect: Rect,
    /// Horizontal velocity, pixels per tick
    pub velocity_x: i32,
    /// Vertical velocity, pixels per tick (positive is down)
    pub velocity_y: f32,
    /// Whether the last vertical step ended resting on something
    pub on_ground: bool,
}

impl Player {
    /// Creates a one-tile player at rest at the given position.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilehop::{Player, Position};
    ///
    /// let player = Player::new(Position::new(50, 536));
    /// assert_eq!(player.rect.width, 32);
    /// assert!(!player.on_ground);
    /// ```
    pub fn new(position: Position) -> Self {
        Self {
            rect: Rect::at(position, TILE_SIZE, TILE_SIZE),
            velocity_x: 0,
            velocity_y: 0.0,
            on_ground: false,
        }
    }

    /// Top-left corner of the player's box.
    pub fn position(&self) -> Position {
        self.rect.position()
    }

    /// Teleports the player without touching its velocity.
    pub fn set_position(&mut self, position: Position) {
        self.rect.set_position(position);
    }

    /// Starts a jump if the player is standing on something.
    pub fn jump(&mut self) {
        if self.on_ground {
            self.velocity_y = JUMP_VELOCITY;
        }
    }

    /// Moves left at walking speed.
    pub fn go_left(&mut self) {
        self.velocity_x = -MOVE_SPEED;
    }

    /// Moves right at walking speed.
    pub fn go_right(&mut self) {
        self.velocity_x = MOVE_SPEED;
    }

    /// Halts horizontal motion.
    pub fn stop(&mut self) {
        self.velocity_x = 0;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PLAYER_START.into())
    }
}

/// Static, solid level geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }
}

/// Trigger volume that moves the player to another room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    pub rect: Rect,
}

impl Door {
    /// Creates a door one tile wide and two tiles tall anchored at `position`.
    pub fn new(position: Position, tile_size: i32) -> Self {
        Self {
            rect: Rect::at(position, tile_size, tile_size * 2),
        }
    }
}

/// A hazard that walks back and forth between two x bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub rect: Rect,
    pub velocity_x: i32,
    /// Leftmost x the enemy's left edge may reach
    pub patrol_start: i32,
    /// Rightmost x the enemy's right edge may reach
    pub patrol_end: i32,
}

impl Enemy {
    /// Creates an enemy with an explicit patrol range.
    pub fn new(rect: Rect, patrol_start: i32, patrol_end: i32) -> Self {
        Self {
            rect,
            velocity_x: ENEMY_SPEED,
            patrol_start,
            patrol_end,
        }
    }

    /// Creates a one-tile enemy patrolling two tiles either side of `position`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilehop::{Enemy, Position};
    ///
    /// let enemy = Enemy::spawn_at(Position::new(640, 256), 32);
    /// assert_eq!(enemy.patrol_start, 576);
    /// assert_eq!(enemy.patrol_end, 704);
    /// assert!(enemy.velocity_x > 0);
    /// ```
    pub fn spawn_at(position: Position, tile_size: i32) -> Self {
        let reach = tile_size * ENEMY_PATROL_TILES;
        Self::new(
            Rect::at(position, tile_size, tile_size),
            position.x - reach,
            position.x + reach,
        )
    }

    /// Advances one tick of patrol.
    ///
    /// Moves first, then reverses once either edge has reached its bound.
    pub fn patrol(&mut self) {
        self.rect.x += self.velocity_x;

        if self.rect.right() >= self.patrol_end || self.rect.left() <= self.patrol_start {
            self.velocity_x = -self.velocity_x;
        }
    }
}

/// Kind tag for room entities, used for dispatch tables such as colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Platform,
    Door,
    Enemy,
}

/// Any entity a room can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entity {
    Platform(Platform),
    Door(Door),
    Enemy(Enemy),
}

impl Entity {
    pub fn rect(&self) -> Rect {
        match self {
            Entity::Platform(platform) => platform.rect,
            Entity::Door(door) => door.rect,
            Entity::Enemy(enemy) => enemy.rect,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Platform(_) => EntityKind::Platform,
            Entity::Door(_) => EntityKind::Door,
            Entity::Enemy(_) => EntityKind::Enemy,
        }
    }

    /// Per-tick update. Only enemies have behaviour.
    pub fn update(&mut self) {
        match self {
            Entity::Platform(_) | Entity::Door(_) => {}
            Entity::Enemy(enemy) => enemy.patrol(),
        }
    }
}

impl From<Platform> for Entity {
    fn from(platform: Platform) -> Self {
        Entity::Platform(platform)
    }
}

impl From<Door> for Entity {
    fn from(door: Door) -> Self {
        Entity::Door(door)
    }
}

impl From<Enemy> for Entity {
    fn from(enemy: Enemy) -> Self {
        Entity::Enemy(enemy)
    }
}
