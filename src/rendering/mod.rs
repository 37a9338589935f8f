//! # Rendering Module
//!
//! Turns a session into a list of coloured rectangles and draws it with macroquad.
//!
//! [`build_draw_list`] is pure so the draw order and colours can be checked
//! without opening a window; [`MacroquadDisplay`] only rasterises the list.

pub mod display;
pub mod palette;

pub use display::*;
pub use palette::*;

use crate::game::{EntityKind, GameSession, Rect};

/// One filled rectangle to draw this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCommand {
    pub rect: Rect,
    pub color: Rgb,
}

impl DrawCommand {
    pub fn new(rect: Rect, kind: EntityKind) -> Self {
        Self {
            rect,
            color: color_for(kind),
        }
    }
}

/// Builds the draw list for the current frame.
///
/// The player comes first, followed by room entities in descriptor order.
pub fn build_draw_list(session: &GameSession) -> Vec<DrawCommand> {
    let room = session.rooms.room();
    let mut commands = Vec::with_capacity(room.entities.len() + 1);

    commands.push(DrawCommand::new(session.player.rect, EntityKind::Player));
    commands.extend(
        room.entities
            .iter()
            .map(|entity| DrawCommand::new(entity.rect(), entity.kind())),
    );

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RoomId;

    #[test]
    fn test_draw_list_starts_with_player() {
        let session = GameSession::new();
        let commands = build_draw_list(&session);

        assert_eq!(commands.len(), 1 + 47 + 1);
        assert_eq!(commands[0].rect, session.player.rect);
        assert_eq!(commands[0].color, PLAYER_BLUE);
    }

    #[test]
    fn test_draw_list_colours_by_kind() {
        let mut session = GameSession::new();
        session.rooms.enter(RoomId::Room2, &mut session.player);
        let commands = build_draw_list(&session);

        let reds = commands.iter().filter(|c| c.color == RED).count();
        let greens = commands.iter().filter(|c| c.color == GREEN).count();
        assert_eq!(reds, 1);
        assert_eq!(greens, 61);
        assert!(!commands.iter().any(|c| c.color == WHITE));
    }

    #[test]
    fn test_draw_list_follows_descriptor_order() {
        let session = GameSession::new();
        let commands = build_draw_list(&session);

        let room_rects: Vec<Rect> = session
            .rooms
            .room()
            .entities
            .iter()
            .map(|entity| entity.rect())
            .collect();
        let drawn: Vec<Rect> = commands.iter().skip(1).map(|c| c.rect).collect();
        assert_eq!(drawn, room_rects);
    }
}
