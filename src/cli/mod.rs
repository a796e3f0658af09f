pub mod cat;
pub mod completions;
pub mod export;
pub mod info;

use clap::{Parser, Subcommand};

/// xp - REXPaint image reader
#[derive(Parser, Debug)]
#[command(name = "xp")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print image header fields and per-layer statistics
    Info(info::InfoArgs),

    /// Print the composited glyph grid as text
    Cat(cat::CatArgs),

    /// Export the composited image to PNG
    Export(export::ExportArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
