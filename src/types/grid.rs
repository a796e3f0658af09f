//! Layered cell grid - the decoded image.
//!
//! Layers stack bottom (0) to top (`layer_count - 1`). Lookups composite
//! top-down: the highest non-transparent cell at a coordinate wins, and
//! layer 0 is returned as a fallback even when it is transparent itself
//! (there is no "no cell" result; rendering a keyed-out bottom cell is the
//! caller's decision).

use crate::error::{Result, XpError};

use super::Cell;

/// A decoded layered image.
///
/// Cells live in one flat buffer indexed `x + y*width + z*width*height`.
/// The dimensions are fixed at construction; cell values may be edited in
/// place through the mutable accessors.
#[derive(Debug, Clone)]
pub struct Grid {
    width: u32,
    height: u32,
    layer_count: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Assemble a grid from decoded parts.
    ///
    /// The buffer length must match the dimensions exactly.
    pub(crate) fn from_parts(width: u32, height: u32, layer_count: u32, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(
            cells.len(),
            width as usize * height as usize * layer_count as usize
        );
        Self {
            width,
            height,
            layer_count,
            cells,
        }
    }

    /// Width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of layers.
    pub fn layer_count(&self) -> u32 {
        self.layer_count
    }

    /// Dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Flat index of (z, x, y), bounds-checked.
    fn index(&self, z: u32, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height || z >= self.layer_count {
            return Err(XpError::OutOfBounds {
                x,
                y,
                z,
                width: self.width,
                height: self.height,
                layers: self.layer_count,
            });
        }
        let w = self.width as usize;
        Ok(x as usize + y as usize * w + z as usize * w * self.height as usize)
    }

    /// Flat index of the cell that wins the top-down scan at (x, y),
    /// starting from layer z.
    ///
    /// Both the shared and mutable resolving accessors go through here, so
    /// the two can never disagree on which cell wins.
    fn resolve_index(&self, z: u32, x: u32, y: u32) -> Result<usize> {
        let mut index = self.index(z, x, y)?;
        let plane = self.width as usize * self.height as usize;
        let mut layer = z;
        while layer > 0 && self.cells[index].is_transparent() {
            layer -= 1;
            index -= plane;
        }
        Ok(index)
    }

    /// Read a cell directly from one layer, with no transparency logic.
    pub fn raw(&self, z: u32, x: u32, y: u32) -> Result<&Cell> {
        Ok(&self.cells[self.index(z, x, y)?])
    }

    /// Mutable direct access to a cell on one layer.
    pub fn raw_mut(&mut self, z: u32, x: u32, y: u32) -> Result<&mut Cell> {
        let index = self.index(z, x, y)?;
        Ok(&mut self.cells[index])
    }

    /// Composite at (x, y), scanning down from layer z.
    ///
    /// Returns the cell at z if z is 0 or the cell is opaque; otherwise the
    /// first opaque cell below it, falling back to layer 0 unconditionally.
    pub fn get_from_layer(&self, z: u32, x: u32, y: u32) -> Result<&Cell> {
        Ok(&self.cells[self.resolve_index(z, x, y)?])
    }

    /// Mutable handle to the cell [`get_from_layer`](Self::get_from_layer)
    /// would return.
    pub fn get_from_layer_mut(&mut self, z: u32, x: u32, y: u32) -> Result<&mut Cell> {
        let index = self.resolve_index(z, x, y)?;
        Ok(&mut self.cells[index])
    }

    /// Composite at (x, y) across all layers, top layer first.
    pub fn get(&self, x: u32, y: u32) -> Result<&Cell> {
        self.get_from_layer(self.layer_count - 1, x, y)
    }

    /// Mutable handle to the cell [`get`](Self::get) would return.
    pub fn get_mut(&mut self, x: u32, y: u32) -> Result<&mut Cell> {
        self.get_from_layer_mut(self.layer_count - 1, x, y)
    }

    /// One layer's cells as a slice, in `x + y*width` order.
    pub fn layer(&self, z: u32) -> Result<&[Cell]> {
        let start = self.index(z, 0, 0)?;
        let plane = self.width as usize * self.height as usize;
        Ok(&self.cells[start..start + plane])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::Colour;
    use super::*;

    /// Grid where every cell encodes its (z, x, y) in the glyph, with
    /// chosen coordinates keyed out.
    fn test_grid(width: u32, height: u32, layers: u32, transparent: &[(u32, u32, u32)]) -> Grid {
        let mut cells = Vec::new();
        for z in 0..layers {
            for y in 0..height {
                for x in 0..width {
                    let bg = if transparent.contains(&(z, x, y)) {
                        Colour::MAGENTA
                    } else {
                        Colour::rgb(z as u8, x as u8, y as u8)
                    };
                    cells.push(Cell::new(z * 10_000 + x * 100 + y, Colour::WHITE, bg));
                }
            }
        }
        // Buffer above is built y-outer per layer, which matches the flat
        // x + y*width + z*width*height layout.
        Grid::from_parts(width, height, layers, cells)
    }

    #[test]
    fn test_raw_reads_single_layer() {
        let grid = test_grid(3, 2, 1, &[]);
        assert_eq!(grid.raw(0, 0, 0).unwrap().glyph, 0);
        assert_eq!(grid.raw(0, 2, 0).unwrap().glyph, 200);
        assert_eq!(grid.raw(0, 1, 1).unwrap().glyph, 101);
    }

    #[test]
    fn test_raw_out_of_bounds() {
        let grid = test_grid(3, 2, 2, &[]);
        assert!(matches!(
            grid.raw(0, 3, 0),
            Err(XpError::OutOfBounds { x: 3, .. })
        ));
        assert!(matches!(
            grid.raw(0, 0, 2),
            Err(XpError::OutOfBounds { y: 2, .. })
        ));
        assert!(matches!(
            grid.raw(2, 0, 0),
            Err(XpError::OutOfBounds { z: 2, .. })
        ));
    }

    #[test]
    fn test_get_top_opaque_wins() {
        let grid = test_grid(2, 2, 3, &[]);
        // Every layer is opaque, so the top layer wins everywhere.
        assert_eq!(grid.get(1, 1).unwrap().glyph, 20_101);
    }

    #[test]
    fn test_get_sees_through_keyed_cells() {
        // Top two layers keyed out at (0, 0); the scan lands on layer 0.
        let grid = test_grid(2, 1, 3, &[(2, 0, 0), (1, 0, 0)]);
        assert_eq!(grid.get(0, 0).unwrap().glyph, 0);
        // Only the top keyed out at (1, 0); layer 1 wins.
        let grid = test_grid(2, 1, 3, &[(2, 1, 0)]);
        assert_eq!(grid.get(1, 0).unwrap().glyph, 10_100);
    }

    #[test]
    fn test_get_layer_zero_fallback_even_if_transparent() {
        let grid = test_grid(1, 1, 2, &[(1, 0, 0), (0, 0, 0)]);
        let cell = grid.get(0, 0).unwrap();
        assert_eq!(cell.glyph, 0);
        assert!(cell.is_transparent());
    }

    #[test]
    fn test_get_matches_get_from_layer_top() {
        let grid = test_grid(3, 3, 3, &[(2, 1, 1), (2, 0, 2), (1, 0, 2)]);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(
                    grid.get(x, y).unwrap(),
                    grid.get_from_layer(2, x, y).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_get_from_layer_starts_mid_stack() {
        let grid = test_grid(1, 1, 3, &[(1, 0, 0)]);
        // Starting at layer 1 skips the opaque top layer entirely and sees
        // through the keyed layer 1 down to layer 0.
        assert_eq!(grid.get_from_layer(1, 0, 0).unwrap().glyph, 0);
        assert_eq!(grid.get_from_layer(2, 0, 0).unwrap().glyph, 20_000);
    }

    #[test]
    fn test_mutable_resolution_agrees() {
        let mut grid = test_grid(2, 2, 3, &[(2, 0, 0), (1, 0, 0), (2, 1, 1)]);
        for y in 0..2 {
            for x in 0..2 {
                let expected = grid.get(x, y).unwrap().glyph;
                assert_eq!(grid.get_mut(x, y).unwrap().glyph, expected);
            }
        }
    }

    #[test]
    fn test_get_mut_edits_winning_cell() {
        let mut grid = test_grid(1, 1, 2, &[(1, 0, 0)]);
        grid.get_mut(0, 0).unwrap().glyph = 42;
        // Layer 0 won the scan, so that is the cell that changed.
        assert_eq!(grid.raw(0, 0, 0).unwrap().glyph, 42);
        assert_eq!(grid.raw(1, 0, 0).unwrap().glyph, 10_000);
    }

    #[test]
    fn test_raw_mut_writes_through() {
        let mut grid = test_grid(2, 1, 1, &[]);
        grid.raw_mut(0, 1, 0).unwrap().bg = Colour::MAGENTA;
        assert!(grid.raw(0, 1, 0).unwrap().is_transparent());
    }

    #[test]
    fn test_layer_slice() {
        let grid = test_grid(2, 2, 2, &[(1, 0, 0)]);
        let bottom = grid.layer(0).unwrap();
        assert_eq!(bottom.len(), 4);
        assert_eq!(bottom[0].glyph, 0);
        let top = grid.layer(1).unwrap();
        assert_eq!(top.iter().filter(|c| c.is_transparent()).count(), 1);
        assert!(grid.layer(2).is_err());
    }
}
