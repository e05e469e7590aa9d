//! Markup (HTML) export.
//!
//! A `white-space: pre` document with per-character color spans when color
//! is enabled, or one span per line otherwise.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::error::{RenderError, Result};
use crate::grid::GlyphGrid;
use crate::sampler::ColorSampler;
use crate::style::StylePolicy;

fn html_escape(glyph: char) -> String {
    match glyph {
        '&' => "&amp;".to_string(),
        '<' => "&lt;".to_string(),
        '>' => "&gt;".to_string(),
        other => other.to_string(),
    }
}

fn html_escape_str(text: &str) -> String {
    text.chars().map(html_escape).collect()
}

pub fn export(
    grid: &GlyphGrid,
    sampler: Option<&ColorSampler>,
    policy: &StylePolicy,
    path: &Path,
    report: &dyn Fn(f64),
) -> Result<PathBuf> {
    let mut doc = String::new();
    doc.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n");
    doc.push_str("<title>Glyph Art</title>\n<style>\nbody {\n");
    let _ = writeln!(doc, "  background-color: {};", policy.background.css());
    doc.push_str("  font-family: monospace;\n  white-space: pre;\n  line-height: 1;\n");
    doc.push_str("}\n</style>\n</head>\n<body>\n");

    let total = grid.height();
    for (row_idx, row) in grid.rows().iter().enumerate() {
        match sampler {
            Some(sampler) => {
                for (col_idx, glyph) in row.chars().enumerate() {
                    let color = sampler.color_at(row_idx, col_idx);
                    let _ = write!(
                        doc,
                        r#"<span style="color:rgb({},{},{})">{}</span>"#,
                        color.r,
                        color.g,
                        color.b,
                        html_escape(glyph)
                    );
                }
                doc.push('\n');
            }
            None => {
                let _ = writeln!(
                    doc,
                    r#"<span style="color:{}">{}</span>"#,
                    policy.foreground.css(),
                    html_escape_str(row)
                );
            }
        }
        report((row_idx + 1) as f64 / total as f64);
    }

    doc.push_str("</body>\n</html>\n");

    std::fs::write(path, doc).map_err(|e| RenderError::io(path, e))?;
    Ok(path.to_path_buf())
}
