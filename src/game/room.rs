//! # Rooms
//!
//! The built contents of a room and the two-state machine that swaps them.

use crate::config::{ROOM2_SPAWN, TILE_SIZE};
use crate::game::{Door, Enemy, Entity, Platform, Player, Position};
use crate::generation::{parse_level, ParsedLevel, LEVEL_1, LEVEL_2};
use log::info;
use serde::{Deserialize, Serialize};

/// Identity of a hand-authored room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomId {
    #[default]
    Room1,
    Room2,
}

impl RoomId {
    /// The level descriptor this room is built from.
    pub fn descriptor(self) -> &'static [&'static str] {
        match self {
            RoomId::Room1 => LEVEL_1,
            RoomId::Room2 => LEVEL_2,
        }
    }

    /// Fixed arrival point that overrides any marker in the descriptor.
    pub fn fixed_spawn(self) -> Option<Position> {
        match self {
            RoomId::Room1 => None,
            RoomId::Room2 => Some(ROOM2_SPAWN.into()),
        }
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomId::Room1 => write!(f, "room 1"),
            RoomId::Room2 => write!(f, "room 2"),
        }
    }
}

/// The live entities of the current room, in descriptor order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub entities: Vec<Entity>,
}

impl Room {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    pub fn platforms(&self) -> impl Iterator<Item = &Platform> + Clone {
        self.entities.iter().filter_map(|entity| match entity {
            Entity::Platform(platform) => Some(platform),
            _ => None,
        })
    }

    pub fn doors(&self) -> impl Iterator<Item = &Door> + Clone {
        self.entities.iter().filter_map(|entity| match entity {
            Entity::Door(door) => Some(door),
            _ => None,
        })
    }

    pub fn enemies(&self) -> impl Iterator<Item = &Enemy> + Clone {
        self.entities.iter().filter_map(|entity| match entity {
            Entity::Enemy(enemy) => Some(enemy),
            _ => None,
        })
    }

    /// Runs one tick of every entity's update.
    pub fn update(&mut self) {
        for entity in self.entities.iter_mut() {
            entity.update();
        }
    }
}

impl From<ParsedLevel> for Room {
    fn from(level: ParsedLevel) -> Self {
        Self::new(level.entities)
    }
}

/// Owns the current room and swaps it on door triggers.
///
/// `Room1` is the initial state. Walking into a door there moves to `Room2`;
/// `Room2` has no onward transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomManager {
    current: RoomId,
    room: Room,
}

impl RoomManager {
    /// Builds the starting room and places the player at its marker.
    pub fn new(player: &mut Player) -> Self {
        let mut manager = Self {
            current: RoomId::Room1,
            room: Room::default(),
        };
        manager.enter(RoomId::Room1, player);
        manager
    }

    pub fn current(&self) -> RoomId {
        self.current
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn room_mut(&mut self) -> &mut Room {
        &mut self.room
    }

    /// Discards the current room and builds `room_id` from its descriptor.
    ///
    /// The descriptor's player marker is applied first, then the room's fixed
    /// spawn if it has one. With neither, the player stays where it was.
    pub fn enter(&mut self, room_id: RoomId, player: &mut Player) {
        let level = parse_level(room_id.descriptor(), TILE_SIZE);

        if let Some(spawn) = level.player_spawn {
            player.set_position(spawn);
        }
        if let Some(spawn) = room_id.fixed_spawn() {
            player.set_position(spawn);
        }

        info!(
            "Entered {} with {} entities, player at {:?}",
            room_id,
            level.entities.len(),
            player.position()
        );

        self.current = room_id;
        self.room = level.into();
    }

    /// Handles the player touching a door.
    ///
    /// Returns the room entered, or `None` when the current room has no
    /// onward transition.
    pub fn on_door_overlap(&mut self, player: &mut Player) -> Option<RoomId> {
        match self.current {
            RoomId::Room1 => {
                self.enter(RoomId::Room2, player);
                Some(RoomId::Room2)
            }
            RoomId::Room2 => None,
        }
    }
}
