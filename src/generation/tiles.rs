//! # Tile Grid Parser
//!
//! Converts a row-of-strings level description into positioned entities.

use crate::game::{Door, Enemy, Entity, Platform, Position, Rect};
use log::debug;

/// Meaning of a single level character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Empty,
    Platform,
    PlayerSpawn,
    Door,
    EnemySpawn,
}

impl Glyph {
    /// Maps a level character to its glyph. Unknown characters are empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilehop::Glyph;
    ///
    /// assert_eq!(Glyph::from_char('X'), Glyph::Platform);
    /// assert_eq!(Glyph::from_char('?'), Glyph::Empty);
    /// ```
    pub fn from_char(c: char) -> Self {
        match c {
            'X' => Glyph::Platform,
            'P' => Glyph::PlayerSpawn,
            'D' => Glyph::Door,
            'E' => Glyph::EnemySpawn,
            _ => Glyph::Empty,
        }
    }
}

/// Everything a level descriptor produces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedLevel {
    /// Room entities in row-major descriptor order
    pub entities: Vec<Entity>,
    /// Pixel position of the last player marker, if any
    pub player_spawn: Option<Position>,
}

impl ParsedLevel {
    pub fn platforms(&self) -> impl Iterator<Item = &Platform> {
        self.entities.iter().filter_map(|entity| match entity {
            Entity::Platform(platform) => Some(platform),
            _ => None,
        })
    }

    pub fn doors(&self) -> impl Iterator<Item = &Door> {
        self.entities.iter().filter_map(|entity| match entity {
            Entity::Door(door) => Some(door),
            _ => None,
        })
    }

    pub fn enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.entities.iter().filter_map(|entity| match entity {
            Entity::Enemy(enemy) => Some(enemy),
            _ => None,
        })
    }
}

/// Parses a level descriptor laid out on a grid of `tile_size` squares.
///
/// Rows may differ in length. The player marker creates no entity; its
/// position is returned so the caller can move the existing player.
///
/// # Examples
///
/// ```
/// use tilehop::{parse_level, Rect};
///
/// let level = parse_level(&["", "", "  X  "], 32);
/// let platforms: Vec<_> = level.platforms().collect();
/// assert_eq!(platforms.len(), 1);
/// assert_eq!(platforms[0].rect, Rect::new(64, 64, 32, 32));
/// ```
pub fn parse_level<S: AsRef<str>>(rows: &[S], tile_size: i32) -> ParsedLevel {
    let mut level = ParsedLevel::default();

    for (row_index, row) in rows.iter().enumerate() {
        for (col_index, c) in row.as_ref().chars().enumerate() {
            let position = Position::from_cell(col_index, row_index, tile_size);
            match Glyph::from_char(c) {
                Glyph::Platform => level
                    .entities
                    .push(Platform::new(Rect::at(position, tile_size, tile_size)).into()),
                Glyph::PlayerSpawn => level.player_spawn = Some(position),
                Glyph::Door => level.entities.push(Door::new(position, tile_size).into()),
                Glyph::EnemySpawn => level
                    .entities
                    .push(Enemy::spawn_at(position, tile_size).into()),
                Glyph::Empty => {}
            }
        }
    }

    debug!(
        "Parsed level: {} platforms, {} doors, {} enemies, spawn {:?}",
        level.platforms().count(),
        level.doors().count(),
        level.enemies().count(),
        level.player_spawn
    );

    level
}
