//! # Game Module
//!
//! Core geometry, entity models, physics and room/session state.
//!
//! This module contains the fundamental building blocks of tilehop:
//! - Integer positions and axis-aligned rectangles
//! - Player, platform, door and enemy models
//! - The per-tick collision resolver
//! - The two-room state machine and the session context

pub mod entities;
pub mod physics;
pub mod room;
pub mod state;

pub use entities::*;
pub use physics::*;
pub use room::*;
pub use state::*;

use serde::{Deserialize, Serialize};

/// Represents a 2D pixel coordinate in the game world.
///
/// # Examples
///
/// ```
/// use tilehop::Position;
///
/// let pos = Position::new(64, 32);
/// assert_eq!(pos.x, 64);
/// assert_eq!(pos.y, 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Pixel position of the top-left corner of a grid cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilehop::Position;
    ///
    /// assert_eq!(Position::from_cell(5, 3, 32), Position::new(160, 96));
    /// ```
    pub fn from_cell(col: usize, row: usize, tile_size: i32) -> Self {
        Self::new(col as i32 * tile_size, row as i32 * tile_size)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned bounding box with an integer top-left corner.
///
/// The edge setters move the rectangle without resizing it, so
/// `set_right(p.left())` butts this box up against the left side of `p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle anchored at `position`.
    pub fn at(position: Position, width: i32, height: i32) -> Self {
        Self::new(position.x, position.y, width, height)
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn set_position(&mut self, position: Position) {
        self.x = position.x;
        self.y = position.y;
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.width;
    }

    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.height;
    }

    /// Whether the interiors of two rectangles intersect.
    ///
    /// Shared edges do not count, and empty rectangles never overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilehop::Rect;
    ///
    /// let a = Rect::new(0, 0, 32, 32);
    /// assert!(a.overlaps(&Rect::new(31, 31, 32, 32)));
    /// assert!(!a.overlaps(&Rect::new(32, 0, 32, 32)));
    /// ```
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}
