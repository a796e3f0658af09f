//! Info command - header fields and per-layer statistics.

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use crate::error::{Result, XpError};
use crate::loader::load_file;
use crate::output::plural;
use crate::types::Grid;

/// Print image header fields and per-layer statistics
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Input .xp files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Emit machine-readable JSON
    #[arg(long)]
    pub json: bool,
}

/// Metadata about a decoded image, for JSON output.
#[derive(Debug, Serialize)]
pub struct ImageInfo {
    /// Source file.
    pub file: String,

    /// Cell dimensions [width, height].
    pub size: [u32; 2],

    /// Number of layers.
    pub layers: u32,

    /// Opaque (non-keyed) cell count per layer, bottom to top.
    pub opaque_cells: Vec<usize>,
}

impl ImageInfo {
    fn gather(path: &Path, grid: &Grid) -> Result<Self> {
        let opaque_cells = (0..grid.layer_count())
            .map(|z| {
                grid.layer(z)
                    .map(|cells| cells.iter().filter(|c| !c.is_transparent()).count())
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            file: path.display().to_string(),
            size: [grid.width(), grid.height()],
            layers: grid.layer_count(),
            opaque_cells,
        })
    }
}

pub fn run(args: InfoArgs) -> Result<()> {
    let mut infos = Vec::new();
    for file in &args.files {
        let grid = load_file(file)?;
        infos.push(ImageInfo::gather(file, &grid)?);
    }

    if args.json {
        let json = serde_json::to_string_pretty(&infos).map_err(|e| XpError::Io {
            path: "-".into(),
            message: format!("Failed to serialize info: {}", e),
        })?;
        println!("{}", json);
        return Ok(());
    }

    for info in &infos {
        println!(
            "{}: {}x{}, {}",
            info.file,
            info.size[0],
            info.size[1],
            plural(info.layers as usize, "layer", "layers")
        );
        for (z, count) in info.opaque_cells.iter().enumerate() {
            println!("  layer {}: {}", z, plural(*count, "opaque cell", "opaque cells"));
        }
    }

    Ok(())
}
