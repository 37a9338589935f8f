//! # Game State Module
//!
//! The session context and the per-tick update that drives every subsystem.
//!
//! [`GameSession`] is owned by the loop driver and handed by reference to
//! input, physics, room and rendering code in turn. Each call to
//! [`GameSession::update`] is one fixed tick: apply input, move the player,
//! update room entities, then check the door and enemy triggers.

use crate::config::SCREEN_HEIGHT;
use crate::game::{step_player, Player, Rect, RoomId, RoomManager};
use crate::input::InputState;
use log::{info, trace};
use serde::{Deserialize, Serialize};

/// How the session currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompletionState {
    /// Game is still in progress
    #[default]
    Playing,
    /// The window was closed
    Quit,
    /// The player touched an enemy
    GameOver,
}

/// Notable things that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The player walked through a door
    RoomChanged { from: RoomId, to: RoomId },
    /// The player touched an enemy
    GameOver { room: RoomId },
    /// A quit request was received
    QuitRequested,
}

/// Serializable view of a session, used for debug logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub tick: u64,
    pub room: RoomId,
    pub completion: CompletionState,
    pub player: Player,
    pub enemies: Vec<Rect>,
}

/// All state for one play session.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// The player, which persists across rooms
    pub player: Player,
    /// Current room and its entities
    pub rooms: RoomManager,
    /// Cleared to end the loop after the current tick
    pub running: bool,
    /// Why the session ended, if it has
    pub completion: CompletionState,
    /// Number of ticks simulated so far
    pub tick: u64,
    /// Fallback ground line
    pub floor_y: i32,
}

impl GameSession {
    /// Starts a session in room 1 with the player at its marker.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilehop::{GameSession, RoomId};
    ///
    /// let session = GameSession::new();
    /// assert!(session.running);
    /// assert_eq!(session.current_room(), RoomId::Room1);
    /// ```
    pub fn new() -> Self {
        let mut player = Player::default();
        let rooms = RoomManager::new(&mut player);

        info!("New session started at {:?}", player.position());

        Self {
            player,
            rooms,
            running: true,
            completion: CompletionState::Playing,
            tick: 0,
            floor_y: SCREEN_HEIGHT,
        }
    }

    pub fn current_room(&self) -> RoomId {
        self.rooms.current()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Runs one fixed tick and reports what happened.
    pub fn update(&mut self, input: &InputState) -> Vec<GameEvent> {
        let mut events = Vec::new();
        self.tick += 1;

        if input.quit {
            self.end(CompletionState::Quit);
            events.push(GameEvent::QuitRequested);
        }
        self.apply_input(input);

        step_player(&mut self.player, self.rooms.room().platforms(), self.floor_y);
        self.rooms.room_mut().update();

        if let Some(event) = self.check_doors() {
            events.push(event);
        }
        if let Some(event) = self.check_enemies() {
            events.push(event);
        }

        for event in &events {
            trace!("Tick {}: {:?}", self.tick, event);
        }
        events
    }

    /// Translates sampled keys into player commands.
    ///
    /// A released direction only stops the player if it is still moving that
    /// way, so letting go of one key never cancels motion started by the other.
    pub fn apply_input(&mut self, input: &InputState) {
        if input.left_pressed {
            self.player.go_left();
        }
        if input.right_pressed {
            self.player.go_right();
        }
        if !input.left_held && self.player.velocity_x < 0 {
            self.player.stop();
        }
        if !input.right_held && self.player.velocity_x > 0 {
            self.player.stop();
        }
        if input.jump_pressed {
            self.player.jump();
        }
    }

    fn check_doors(&mut self) -> Option<GameEvent> {
        let touching = self
            .rooms
            .room()
            .doors()
            .any(|door| door.rect.overlaps(&self.player.rect));
        if !touching {
            return None;
        }

        let from = self.rooms.current();
        self.rooms
            .on_door_overlap(&mut self.player)
            .map(|to| GameEvent::RoomChanged { from, to })
    }

    fn check_enemies(&mut self) -> Option<GameEvent> {
        let hit = self
            .rooms
            .room()
            .enemies()
            .any(|enemy| enemy.rect.overlaps(&self.player.rect));
        if !hit {
            return None;
        }

        let room = self.rooms.current();
        info!("Player hit an enemy in {} at tick {}", room, self.tick);
        self.end(CompletionState::GameOver);
        Some(GameEvent::GameOver { room })
    }

    fn end(&mut self, completion: CompletionState) {
        self.running = false;
        if self.completion == CompletionState::Playing {
            self.completion = completion;
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            tick: self.tick,
            room: self.current_room(),
            completion: self.completion,
            player: self.player.clone(),
            enemies: self.rooms.room().enemies().map(|enemy| enemy.rect).collect(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
