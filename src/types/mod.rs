//! Core domain types for xp.
//!
//! This module contains the fundamental types of a decoded image:
//! - `Colour` - RGB colour values
//! - `Cell` - one glyph/colour triple at a grid position on a layer
//! - `Grid` - the decoded layered image
//! - `tilemap` - the default CP437 glyph translation table

mod cell;
mod colour;
mod grid;
pub mod tilemap;

pub use cell::Cell;
pub use colour::Colour;
pub use grid::Grid;
