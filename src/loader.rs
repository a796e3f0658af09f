//! File loading - the gzip transport in front of the decoder.
//!
//! .xp files are gzip-compressed on disk. The decoder itself only ever
//! sees the decompressed stream, so decompression lives out here with the
//! rest of the filesystem plumbing.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use flate2::read::GzDecoder;

use crate::decoder::decode;
use crate::error::{Result, XpError};
use crate::types::Grid;

/// Load and decode a gzip-compressed .xp file.
pub fn load_file(path: &Path) -> Result<Grid> {
    let file = File::open(path).map_err(|e| XpError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    decode(GzDecoder::new(BufReader::new(file)))
}

/// Decode an already-decompressed image held in memory.
pub fn load_bytes(bytes: &[u8]) -> Result<Grid> {
    decode(bytes)
}
