//! # Utilities Module
//!
//! Loop timing helpers.

pub mod timing;

pub use timing::*;
