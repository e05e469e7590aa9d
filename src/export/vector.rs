//! Vector (SVG) export.
//!
//! One `<text>` element per grid row; per-cell `<tspan>`s carry sampled
//! colors when color is enabled. Monospace cell width is 0.6x the font
//! size, the usual advance ratio for monospace faces.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::error::{RenderError, Result};
use crate::grid::GlyphGrid;
use crate::sampler::ColorSampler;
use crate::style::StylePolicy;

const CHAR_WIDTH_RATIO: f32 = 0.6;

fn xml_escape(glyph: char) -> String {
    match glyph {
        '&' => "&amp;".to_string(),
        '<' => "&lt;".to_string(),
        '>' => "&gt;".to_string(),
        other => other.to_string(),
    }
}

fn xml_escape_str(text: &str) -> String {
    text.chars().map(xml_escape).collect()
}

pub fn export(
    grid: &GlyphGrid,
    sampler: Option<&ColorSampler>,
    policy: &StylePolicy,
    font_size: f32,
    path: &Path,
    report: &dyn Fn(f64),
) -> Result<PathBuf> {
    let char_width = font_size * CHAR_WIDTH_RATIO;
    let char_height = font_size;
    let svg_width = (grid.width() as f32 * char_width) as u32;
    let svg_height = (grid.height() as f32 * char_height) as u32;

    let mut doc = String::new();
    let _ = writeln!(
        doc,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{svg_width}" height="{svg_height}">"#
    );
    let _ = writeln!(
        doc,
        r#"<rect width="100%" height="100%" fill="{}" />"#,
        policy.background.css()
    );

    let total = grid.height();
    for (row_idx, row) in grid.rows().iter().enumerate() {
        let y = (row_idx + 1) as f32 * char_height;
        match sampler {
            Some(sampler) => {
                let mut tspans = String::new();
                for (col_idx, glyph) in row.chars().enumerate() {
                    let color = sampler.color_at(row_idx, col_idx);
                    let x = col_idx as f32 * char_width;
                    let _ = write!(
                        tspans,
                        r#"<tspan x="{x}" dy="0" fill="rgb({},{},{})">{}</tspan>"#,
                        color.r,
                        color.g,
                        color.b,
                        xml_escape(glyph)
                    );
                }
                let _ = writeln!(
                    doc,
                    r#"<text x="0" y="{y}" font-family="monospace" font-size="{font_size}">{tspans}</text>"#
                );
            }
            None => {
                let _ = writeln!(
                    doc,
                    r#"<text x="0" y="{y}" font-family="monospace" font-size="{font_size}" fill="{}">{}</text>"#,
                    policy.foreground.css(),
                    xml_escape_str(row)
                );
            }
        }
        report((row_idx + 1) as f64 / total as f64);
    }
    doc.push_str("</svg>\n");

    std::fs::write(path, doc).map_err(|e| RenderError::io(path, e))?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ramp::GlyphRamp;
    use image::{DynamicImage, RgbImage};

    fn grid_2x2() -> GlyphGrid {
        GlyphGrid::from_rows(vec!["@<".into(), ". ".into()]).unwrap()
    }

    #[test]
    fn test_plain_document_structure() {
        let policy = StylePolicy::for_ramp(&GlyphRamp::Monochrome);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("art.svg");

        export(&grid_2x2(), None, &policy, 10.0, &path, &|_| {}).unwrap();

        let doc = std::fs::read_to_string(&path).unwrap();
        assert!(doc.starts_with("<svg xmlns="));
        assert!(doc.contains(r##"fill="#2B3338""##));
        assert_eq!(doc.matches("<text").count(), 2);
        assert!(doc.trim_end().ends_with("</svg>"));
        // Angle bracket glyph must be escaped.
        assert!(doc.contains("&lt;"));
    }

    #[test]
    fn test_colored_document_has_one_tspan_per_cell() {
        let policy = StylePolicy::for_ramp(&GlyphRamp::Monochrome);
        let color = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, image::Rgb([5, 6, 7])));
        let sampler = ColorSampler::new(&color, 2, 2, false);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("art.svg");

        export(&grid_2x2(), Some(&sampler), &policy, 10.0, &path, &|_| {}).unwrap();

        let doc = std::fs::read_to_string(&path).unwrap();
        assert_eq!(doc.matches("<tspan").count(), 4);
        assert!(doc.contains("rgb("));
    }

    #[test]
    fn test_canvas_dimensions() {
        let policy = StylePolicy::for_ramp(&GlyphRamp::Monochrome);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("art.svg");

        export(&grid_2x2(), None, &policy, 10.0, &path, &|_| {}).unwrap();

        let doc = std::fs::read_to_string(&path).unwrap();
        // 2 cols * 6px, 2 rows * 10px.
        assert!(doc.contains(r#"width="12" height="20""#));
    }
}
