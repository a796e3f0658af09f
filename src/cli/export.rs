//! Export command - PNG output, one pixel per cell.
//!
//! Renders the composite with resolved background colours. Cells that fall
//! all the way through to a keyed layer 0 become fully transparent pixels.

use std::path::{Path, PathBuf};

use clap::Args;
use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{Result, XpError};
use crate::loader::load_file;
use crate::output::{display_path, Printer};
use crate::types::Grid;

/// Export the composited image to PNG
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Input .xp file
    pub file: PathBuf,

    /// Output path (defaults to the input with a .png extension)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Integer scale factor (1 = one pixel per cell)
    #[arg(long, default_value = "1")]
    pub scale: u32,
}

pub fn run(args: ExportArgs) -> Result<()> {
    let grid = load_file(&args.file)?;
    let out = args
        .output
        .unwrap_or_else(|| args.file.with_extension("png"));

    write_png(&grid, &out, args.scale)?;

    Printer::new().status(
        "Exported",
        &format!("{} ({}x{})", display_path(&out), grid.width(), grid.height()),
    );
    Ok(())
}

/// Write the composite as a PNG with integer upscaling.
pub fn write_png(grid: &Grid, path: &Path, scale: u32) -> Result<()> {
    let scale = scale.max(1); // Minimum scale of 1

    let mut img: RgbaImage = ImageBuffer::new(grid.width() * scale, grid.height() * scale);

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let cell = grid.get(x, y)?;
            let rgba = if cell.is_transparent() {
                Rgba([0, 0, 0, 0])
            } else {
                Rgba(cell.bg.to_rgba(255))
            };

            // Fill scaled pixels
            for sy in 0..scale {
                for sx in 0..scale {
                    img.put_pixel(x * scale + sx, y * scale + sy, rgba);
                }
            }
        }
    }

    img.save(path).map_err(|e| XpError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
