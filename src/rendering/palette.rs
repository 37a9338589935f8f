//! # Palette
//!
//! Fixed colours for the background and each entity kind.

use crate::game::EntityKind;

/// An opaque 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for macroquad::color::Color {
    fn from(rgb: Rgb) -> Self {
        macroquad::color::Color::from_rgba(rgb.r, rgb.g, rgb.b, 255)
    }
}

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);
pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const PLAYER_BLUE: Rgb = Rgb::new(0, 128, 255);

/// Frame clear colour.
pub const BACKGROUND: Rgb = BLACK;

/// Fill colour for an entity kind.
pub fn color_for(kind: EntityKind) -> Rgb {
    match kind {
        EntityKind::Player => PLAYER_BLUE,
        EntityKind::Platform => GREEN,
        EntityKind::Door => WHITE,
        EntityKind::Enemy => RED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_have_distinct_colours() {
        let colours = [
            color_for(EntityKind::Player),
            color_for(EntityKind::Platform),
            color_for(EntityKind::Door),
            color_for(EntityKind::Enemy),
        ];
        for (i, a) in colours.iter().enumerate() {
            assert_ne!(*a, BACKGROUND);
            for b in colours.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_conversion_to_macroquad() {
        let color: macroquad::color::Color = PLAYER_BLUE.into();
        assert_eq!(color.r, 0.0);
        assert!((color.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(color.b, 1.0);
        assert_eq!(color.a, 1.0);
    }
}
