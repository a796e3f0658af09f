//! Binary decoder for the decompressed .xp byte stream.
//!
//! The stream is little-endian throughout: a short header (layer count and
//! dimensions), then one run of 10-byte cell records per layer in
//! column-major order. Layers after the first repeat the width/height
//! fields; those copies are skipped without re-validation.
//!
//! Decoding is a single front-to-back pass with no seeking. It either
//! produces a fully-populated [`Grid`] or a typed error; a partially
//! filled buffer is never handed to the caller.

use std::io::{self, Read};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{Result, XpError};
use crate::types::{Cell, Colour, Grid};

/// Hard format bound; a count outside 1..=MAX_LAYERS means the stream is
/// not an .xp image.
const MAX_LAYERS: u32 = 9;

/// Offset-tracking reader over the decompressed stream.
///
/// Keeps the byte position so truncation errors can say where the stream
/// ran dry.
struct StreamReader<R> {
    inner: R,
    offset: u64,
}

impl<R: Read> StreamReader<R> {
    fn new(inner: R) -> Self {
        Self { inner, offset: 0 }
    }

    fn read_i32(&mut self) -> Result<i32> {
        let value = self
            .inner
            .read_i32::<LittleEndian>()
            .map_err(|e| self.convert(e))?;
        self.offset += 4;
        Ok(value)
    }

    fn read_u32(&mut self) -> Result<u32> {
        let value = self
            .inner
            .read_u32::<LittleEndian>()
            .map_err(|e| self.convert(e))?;
        self.offset += 4;
        Ok(value)
    }

    fn read_u8(&mut self) -> Result<u8> {
        let value = self.inner.read_u8().map_err(|e| self.convert(e))?;
        self.offset += 1;
        Ok(value)
    }

    fn convert(&self, e: io::Error) -> XpError {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            XpError::UnexpectedEof {
                offset: self.offset,
            }
        } else {
            XpError::IoError(e)
        }
    }
}

/// Decode a decompressed .xp byte stream into a [`Grid`].
///
/// The first header field carries two historical meanings: non-negative
/// values are the layer count of a version-tagged stream, while a negative
/// value marks the legacy version-less layout whose true count follows in
/// the next field. Both layouts exist in the wild, so the split is kept
/// byte-compatible rather than cleaned up.
pub fn decode<R: Read>(reader: R) -> Result<Grid> {
    let mut stream = StreamReader::new(reader);

    let version_or_layers = stream.read_i32()?;
    let layer_count = if version_or_layers >= 0 {
        version_or_layers as u32
    } else {
        stream.read_i32()? as u32
    };
    let width = stream.read_i32()? as u32;
    let height = stream.read_i32()? as u32;

    if !(1..=MAX_LAYERS).contains(&layer_count) {
        return Err(XpError::InvalidLayerCount { count: layer_count });
    }

    // Width/height are not range-validated; a hostile header surfaces as an
    // allocation error here instead of an abort.
    let cell_count = width as u128 * height as u128 * layer_count as u128;
    let len =
        usize::try_from(cell_count).map_err(|_| XpError::Allocation { cells: cell_count })?;
    let mut cells: Vec<Cell> = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|_| XpError::Allocation { cells: cell_count })?;
    cells.resize(len, Cell::default());

    let w = width as usize;
    let plane = w * height as usize;
    for z in 0..layer_count as usize {
        if z > 0 {
            // Redundant per-layer copies of width/height. Present in the
            // stream but never checked against the header.
            stream.read_i32()?;
            stream.read_i32()?;
        }
        // Column-major on disk: x is the outer loop.
        for x in 0..w {
            for y in 0..height as usize {
                cells[x + y * w + z * plane] = read_cell(&mut stream)?;
            }
        }
    }

    Ok(Grid::from_parts(width, height, layer_count, cells))
}

/// One 10-byte cell record: glyph index, then fg and bg channels.
fn read_cell<R: Read>(stream: &mut StreamReader<R>) -> Result<Cell> {
    let glyph = stream.read_u32()?;
    let fg = Colour::rgb(stream.read_u8()?, stream.read_u8()?, stream.read_u8()?);
    let bg = Colour::rgb(stream.read_u8()?, stream.read_u8()?, stream.read_u8()?);
    Ok(Cell::new(glyph, fg, bg))
}
