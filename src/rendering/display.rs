//! # Display Management
//!
//! Window configuration and frame drawing using macroquad.

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use crate::game::GameSession;
use crate::rendering::{build_draw_list, DrawCommand, BACKGROUND};
use macroquad::prelude::*;
use macroquad::window::Conf;

/// Window settings for the fixed 800x600 viewport.
pub fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_string(),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

/// Macroquad display manager for the game.
#[derive(Debug, Default)]
pub struct MacroquadDisplay {
    /// Rectangles drawn in the last frame
    pub last_frame_commands: usize,
}

impl MacroquadDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the frame and draws every live entity.
    pub fn render(&mut self, session: &GameSession) {
        let commands = build_draw_list(session);

        clear_background(BACKGROUND.into());
        for command in &commands {
            Self::draw(command);
        }

        self.last_frame_commands = commands.len();
    }

    fn draw(command: &DrawCommand) {
        draw_rectangle(
            command.rect.x as f32,
            command.rect.y as f32,
            command.rect.width as f32,
            command.rect.height as f32,
            command.color.into(),
        );
    }
}
