//! Cell type - one glyph position on one layer.

use super::Colour;

/// A single cell: a glyph index plus foreground and background colours.
///
/// The glyph is a raw index into an external glyph table (CP437 by
/// default), not a character code. Translation to a displayable character
/// is the caller's concern; see [`tilemap`](super::tilemap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    /// Glyph table index.
    pub glyph: u32,

    /// Foreground colour.
    pub fg: Colour,

    /// Background colour.
    pub bg: Colour,
}

impl Cell {
    /// Create a new cell.
    pub const fn new(glyph: u32, fg: Colour, bg: Colour) -> Self {
        Self { glyph, fg, bg }
    }

    /// Whether this cell shows through to the layer below.
    ///
    /// True iff the background is exactly the magenta key; transparency is
    /// derived from the colour, never stored.
    pub fn is_transparent(&self) -> bool {
        self.bg == Colour::MAGENTA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_exact_key() {
        let cell = Cell::new(64, Colour::WHITE, Colour::MAGENTA);
        assert!(cell.is_transparent());
    }

    #[test]
    fn test_near_key_is_opaque() {
        // Only the exact key counts; off-by-one channels are ordinary colours.
        assert!(!Cell::new(0, Colour::WHITE, Colour::rgb(255, 0, 254)).is_transparent());
        assert!(!Cell::new(0, Colour::WHITE, Colour::rgb(254, 0, 255)).is_transparent());
        assert!(!Cell::new(0, Colour::WHITE, Colour::rgb(255, 1, 255)).is_transparent());
    }

    #[test]
    fn test_foreground_key_does_not_matter() {
        let cell = Cell::new(0, Colour::MAGENTA, Colour::BLACK);
        assert!(!cell.is_transparent());
    }
}
