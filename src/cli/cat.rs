//! Cat command - print a grid as text via the CP437 table.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::loader::load_file;
use crate::types::tilemap::glyph_to_char;
use crate::types::Cell;

/// Print the composited glyph grid as text
#[derive(Args, Debug)]
pub struct CatArgs {
    /// Input .xp file
    pub file: PathBuf,

    /// Read one layer raw instead of compositing (bottom layer is 0)
    #[arg(long)]
    pub layer: Option<u32>,

    /// Colour the output with 24-bit ANSI escapes
    #[arg(long)]
    pub color: bool,
}

pub fn run(args: CatArgs) -> Result<()> {
    let grid = load_file(&args.file)?;

    let mut out = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let cell = match args.layer {
                Some(z) => grid.raw(z, x, y)?,
                None => grid.get(x, y)?,
            };
            push_cell(&mut out, cell, args.color);
        }
        if args.color {
            out.push_str("\x1b[0m");
        }
        out.push('\n');
    }
    print!("{}", out);

    Ok(())
}

/// Append one cell's rendition.
///
/// Keyed cells carry no ink: they print as a plain space, with any active
/// colour state cleared first so they do not inherit the previous cell's
/// background.
fn push_cell(out: &mut String, cell: &Cell, color: bool) {
    if cell.is_transparent() {
        if color {
            out.push_str("\x1b[0m");
        }
        out.push(' ');
        return;
    }

    let ch = glyph_to_char(cell.glyph);
    if color {
        out.push_str(&format!(
            "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m{}",
            cell.fg.r, cell.fg.g, cell.fg.b, cell.bg.r, cell.bg.g, cell.bg.b, ch
        ));
    } else {
        out.push(ch);
    }
}
