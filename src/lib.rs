//! xp - REXPaint image reader
//!
//! A library for decoding gzip-compressed .xp layered images into a flat
//! cell grid, plus coordinate lookups that composite the layer stack
//! top-down through the magenta transparency key.

pub mod cli;
pub mod decoder;
pub mod error;
pub mod loader;
pub mod output;
pub mod types;

pub use decoder::decode;
pub use error::{Result, XpError};
pub use loader::{load_bytes, load_file};
pub use types::tilemap::{glyph_to_char, CP437};
pub use types::{Cell, Colour, Grid};
