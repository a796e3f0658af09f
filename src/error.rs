use miette::Diagnostic;
use thiserror::Error;

/// Main error type for xp operations
#[derive(Error, Diagnostic, Debug)]
pub enum XpError {
    #[error("IO error: {0}")]
    #[diagnostic(code(xp::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(xp::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid layer count: {count}")]
    #[diagnostic(
        code(xp::decode::layer_count),
        help("Layer counts outside 1..=9 mean the file is corrupt or not an .xp image")
    )]
    InvalidLayerCount { count: u32 },

    #[error("Unexpected end of stream at byte {offset}")]
    #[diagnostic(
        code(xp::decode::eof),
        help("The image data is truncated; re-export the file from the editor")
    )]
    UnexpectedEof { offset: u64 },

    #[error("Cannot allocate {cells} cells")]
    #[diagnostic(
        code(xp::decode::alloc),
        help("The header declares implausibly large dimensions")
    )]
    Allocation { cells: u128 },

    #[error("Coordinate ({x}, {y}) on layer {z} is outside the {width}x{height}x{layers} grid")]
    #[diagnostic(code(xp::grid::bounds))]
    OutOfBounds {
        x: u32,
        y: u32,
        z: u32,
        width: u32,
        height: u32,
        layers: u32,
    },
}

pub type Result<T> = std::result::Result<T, XpError>;
