//! ANSI truecolor rendering for terminal preview.

use crate::grid::GlyphGrid;
use crate::palette::Rgb;
use crate::sampler::ColorSampler;

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// Format RGB as ANSI TrueColor escape sequence (foreground)
pub fn rgb_to_ansi_fg(rgb: Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", rgb.r, rgb.g, rgb.b)
}

/// Render the grid as terminal lines, one string per row. With a sampler
/// each glyph is wrapped in its cell color; without one the rows come back
/// as plain text.
pub fn render_ansi(grid: &GlyphGrid, sampler: Option<&ColorSampler>) -> Vec<String> {
    match sampler {
        None => grid.rows().to_vec(),
        Some(sampler) => grid
            .rows()
            .iter()
            .enumerate()
            .map(|(row_idx, row)| {
                let mut line = String::with_capacity(row.len() * 20);
                for (col_idx, glyph) in row.chars().enumerate() {
                    let color = sampler.color_at(row_idx, col_idx);
                    line.push_str(&rgb_to_ansi_fg(color));
                    line.push(glyph);
                    line.push_str(ANSI_RESET);
                }
                line
            })
            .collect(),
    }
}
