//! # Input Module
//!
//! Per-frame keyboard sampling.
//!
//! Key state is read once per rendered frame into an [`InputState`]. Fresh
//! presses are kept until a simulation tick consumes them, so a frame that
//! runs no ticks does not swallow a jump.

pub mod bindings;

pub use bindings::*;

use macroquad::prelude::*;

/// Snapshot of player intent for one simulation tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    /// A move-left key is currently down
    pub left_held: bool,
    /// A move-right key is currently down
    pub right_held: bool,
    /// A move-left key went down since the last tick
    pub left_pressed: bool,
    /// A move-right key went down since the last tick
    pub right_pressed: bool,
    /// A jump key went down since the last tick
    pub jump_pressed: bool,
    /// The window asked to close
    pub quit: bool,
}

impl InputState {
    /// No keys held, nothing pressed.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Folds a newer sample into this one.
    ///
    /// Held flags take the newer value; edges and quit accumulate until
    /// [`InputState::consume_edges`] clears them.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilehop::InputState;
    ///
    /// let mut pending = InputState { jump_pressed: true, ..InputState::idle() };
    /// pending.merge(InputState { right_held: true, ..InputState::idle() });
    /// assert!(pending.jump_pressed);
    /// assert!(pending.right_held);
    /// ```
    pub fn merge(&mut self, newer: InputState) {
        self.left_held = newer.left_held;
        self.right_held = newer.right_held;
        self.left_pressed |= newer.left_pressed;
        self.right_pressed |= newer.right_pressed;
        self.jump_pressed |= newer.jump_pressed;
        self.quit |= newer.quit;
    }

    /// Clears one-shot flags after a tick has seen them.
    pub fn consume_edges(&mut self) {
        self.left_pressed = false;
        self.right_pressed = false;
        self.jump_pressed = false;
        self.quit = false;
    }
}

/// Input handler that samples macroquad's keyboard state.
pub struct InputHandler {
    /// Keys bound to each action
    pub bindings: KeyBindings,
    /// Sampled state not yet consumed by a tick
    pending: InputState,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a handler with the default key bindings.
    pub fn new() -> Self {
        Self::with_bindings(KeyBindings::default())
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            pending: InputState::idle(),
        }
    }

    /// Samples the keyboard and returns the state the next tick should use.
    pub fn poll(&mut self) -> InputState {
        let sample = self.sample();
        self.pending.merge(sample);
        self.pending
    }

    /// Marks the pending edges as handled.
    pub fn consume(&mut self) {
        self.pending.consume_edges();
    }

    fn sample(&self) -> InputState {
        InputState {
            left_held: self.bindings.left.iter().any(|key| is_key_down(*key)),
            right_held: self.bindings.right.iter().any(|key| is_key_down(*key)),
            left_pressed: self.bindings.left.iter().any(|key| is_key_pressed(*key)),
            right_pressed: self.bindings.right.iter().any(|key| is_key_pressed(*key)),
            jump_pressed: self.bindings.jump.iter().any(|key| is_key_pressed(*key)),
            quit: is_quit_requested(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume_on_idle_stays_idle() {
        let mut state = InputState::idle();
        state.consume_edges();
        assert_eq!(state, InputState::idle());
    }

    #[test]
    fn test_merge_replaces_held_flags() {
        let mut pending = InputState {
            left_held: true,
            ..InputState::idle()
        };
        pending.merge(InputState {
            right_held: true,
            ..InputState::idle()
        });

        assert!(!pending.left_held);
        assert!(pending.right_held);
    }

    #[test]
    fn test_edges_survive_until_consumed() {
        let mut pending = InputState::idle();
        pending.merge(InputState {
            jump_pressed: true,
            left_pressed: true,
            left_held: true,
            ..InputState::idle()
        });
        // A later frame with the key already down reports no new press
        pending.merge(InputState {
            left_held: true,
            ..InputState::idle()
        });

        assert!(pending.jump_pressed);
        assert!(pending.left_pressed);

        pending.consume_edges();
        assert_eq!(
            pending,
            InputState {
                left_held: true,
                ..InputState::idle()
            }
        );
    }

    #[test]
    fn test_quit_accumulates() {
        let mut pending = InputState::idle();
        pending.merge(InputState {
            quit: true,
            ..InputState::idle()
        });
        pending.merge(InputState::idle());
        assert!(pending.quit);
    }
}
