//! Plain text export.
//!
//! One UTF-8 line per grid row, newline-terminated. No color, no styling;
//! reading the file back reconstructs the grid exactly.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{RenderError, Result};
use crate::grid::GlyphGrid;

pub fn export(grid: &GlyphGrid, path: &Path, report: &dyn Fn(f64)) -> Result<PathBuf> {
    let file = File::create(path).map_err(|e| RenderError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    let total = grid.height();
    for (i, row) in grid.rows().iter().enumerate() {
        writeln!(writer, "{row}").map_err(|e| RenderError::io(path, e))?;
        report((i + 1) as f64 / total as f64);
    }
    writer.flush().map_err(|e| RenderError::io(path, e))?;

    Ok(path.to_path_buf())
}
