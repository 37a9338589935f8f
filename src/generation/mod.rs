//! # Generation Module
//!
//! Level descriptors and the tile grid parser that turns them into entities.
//!
//! Levels are fixed ASCII grids, one string per row. Each character is one
//! tile; see [`Glyph`] for the meaningful ones.

pub mod levels;
pub mod tiles;

pub use levels::*;
pub use tiles::*;
