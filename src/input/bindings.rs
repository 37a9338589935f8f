//! # Key Bindings
//!
//! Which keys drive which action. Each action accepts two keys.

use macroquad::prelude::KeyCode;

/// Keyboard layout for the three movement actions.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBindings {
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
    pub jump: Vec<KeyCode>,
}

impl Default for KeyBindings {
    /// Arrow keys plus `A`/`D`, with `Space` as the second jump key.
    fn default() -> Self {
        Self {
            left: vec![KeyCode::Left, KeyCode::A],
            right: vec![KeyCode::Right, KeyCode::D],
            jump: vec![KeyCode::Up, KeyCode::Space],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();

        assert_eq!(bindings.left, vec![KeyCode::Left, KeyCode::A]);
        assert_eq!(bindings.right, vec![KeyCode::Right, KeyCode::D]);
        assert_eq!(bindings.jump, vec![KeyCode::Up, KeyCode::Space]);
    }
}
