//! Raster (PNG) export.
//!
//! Draws each glyph at a fixed cell position with a TrueType font. When no
//! font can be loaded the exporter degrades to the built-in 5x7 bitmap font
//! instead of aborting.

use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::RgbImage;
use imageproc::drawing::draw_text_mut;

use super::{bitmap_font, FontSpec};
use crate::error::{RenderError, Result};
use crate::grid::GlyphGrid;
use crate::palette::Rgb;
use crate::sampler::ColorSampler;
use crate::style::StylePolicy;

/// Common monospace font locations probed when no explicit path is given
/// or the given path fails to load.
const FALLBACK_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
];

/// A loaded cell-drawing strategy with fixed cell metrics.
enum CellFont {
    Outline {
        font: FontVec,
        scale: PxScale,
        cell: (u32, u32),
    },
    Builtin {
        scale: u32,
    },
}

impl CellFont {
    fn cell(&self) -> (u32, u32) {
        match self {
            CellFont::Outline { cell, .. } => *cell,
            CellFont::Builtin { scale } => (
                bitmap_font::CELL_WIDTH * scale,
                bitmap_font::CELL_HEIGHT * scale,
            ),
        }
    }

    fn draw(&self, canvas: &mut RgbImage, x: u32, y: u32, color: image::Rgb<u8>, glyph: char) {
        match self {
            CellFont::Outline { font, scale, .. } => {
                let mut buf = [0u8; 4];
                draw_text_mut(
                    canvas,
                    color,
                    x as i32,
                    y as i32,
                    *scale,
                    font,
                    glyph.encode_utf8(&mut buf),
                );
            }
            CellFont::Builtin { scale } => {
                let Some(columns) = bitmap_font::glyph_columns(glyph) else {
                    return;
                };
                for (col, bits) in columns.iter().enumerate() {
                    for row in 0..bitmap_font::GLYPH_HEIGHT {
                        if bits >> row & 1 == 1 {
                            fill_block(
                                canvas,
                                x + col as u32 * scale,
                                y + row * scale,
                                *scale,
                                color,
                            );
                        }
                    }
                }
            }
        }
    }
}

fn fill_block(canvas: &mut RgbImage, x: u32, y: u32, size: u32, color: image::Rgb<u8>) {
    for dy in 0..size {
        for dx in 0..size {
            let (px, py) = (x + dx, y + dy);
            if px < canvas.width() && py < canvas.height() {
                canvas.put_pixel(px, py, color);
            }
        }
    }
}

/// Try the configured path, then well-known monospace locations, then the
/// built-in bitmap font. Never fails.
fn load_font(spec: &FontSpec) -> CellFont {
    let candidates = spec
        .path
        .iter()
        .map(|p| p.as_path())
        .chain(FALLBACK_FONT_PATHS.iter().map(Path::new));

    for candidate in candidates {
        let Ok(bytes) = std::fs::read(candidate) else {
            log::debug!("font not readable: {}", candidate.display());
            continue;
        };
        match FontVec::try_from_vec(bytes) {
            Ok(font) => {
                log::info!("raster export using font {}", candidate.display());
                let scale = PxScale::from(spec.size);
                let cell = {
                    let scaled = font.as_scaled(scale);
                    let advance = scaled.h_advance(scaled.glyph_id('A'));
                    (
                        advance.ceil().max(1.0) as u32,
                        scaled.height().ceil().max(1.0) as u32,
                    )
                };
                return CellFont::Outline { font, scale, cell };
            }
            Err(e) => log::debug!("font rejected: {}: {e}", candidate.display()),
        }
    }

    log::warn!("no usable TrueType font found, using the built-in 5x7 bitmap font");
    CellFont::Builtin {
        scale: (spec.size / bitmap_font::CELL_HEIGHT as f32).round().max(1.0) as u32,
    }
}

fn image_rgb(color: Rgb) -> image::Rgb<u8> {
    image::Rgb([color.r, color.g, color.b])
}

pub fn export(
    grid: &GlyphGrid,
    sampler: Option<&ColorSampler>,
    policy: &StylePolicy,
    spec: &FontSpec,
    path: &Path,
    report: &dyn Fn(f64),
) -> Result<PathBuf> {
    let font = load_font(spec);
    let (cell_width, cell_height) = font.cell();

    let canvas_width = grid.width() as u32 * cell_width;
    let canvas_height = grid.height() as u32 * cell_height;
    let mut canvas = RgbImage::from_pixel(canvas_width, canvas_height, image_rgb(policy.background));

    let total = grid.height();
    for (row_idx, row) in grid.rows().iter().enumerate() {
        let y = row_idx as u32 * cell_height;
        for (col_idx, glyph) in row.chars().enumerate() {
            let color = match sampler {
                Some(sampler) => sampler.color_at(row_idx, col_idx),
                None => policy.foreground,
            };
            font.draw(
                &mut canvas,
                col_idx as u32 * cell_width,
                y,
                image_rgb(color),
                glyph,
            );
        }
        report((row_idx + 1) as f64 / total as f64);
    }

    canvas.save(path).map_err(RenderError::from)?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ramp::GlyphRamp;

    #[test]
    fn test_builtin_cell_metrics() {
        let font = CellFont::Builtin { scale: 1 };
        assert_eq!(font.cell(), (6, 8));
        let font = CellFont::Builtin { scale: 2 };
        assert_eq!(font.cell(), (12, 16));
    }

    #[test]
    fn test_builtin_draw_marks_pixels() {
        let bg = image::Rgb([0u8, 0, 0]);
        let fg = image::Rgb([255u8, 255, 255]);
        let mut canvas = RgbImage::from_pixel(6, 8, bg);

        let font = CellFont::Builtin { scale: 1 };
        font.draw(&mut canvas, 0, 0, fg, '@');

        assert!(canvas.pixels().any(|p| *p == fg));
    }

    #[test]
    fn test_builtin_space_draws_nothing() {
        let bg = image::Rgb([9u8, 9, 9]);
        let mut canvas = RgbImage::from_pixel(6, 8, bg);

        let font = CellFont::Builtin { scale: 1 };
        font.draw(&mut canvas, 0, 0, image::Rgb([255, 255, 255]), ' ');

        assert!(canvas.pixels().all(|p| *p == bg));
    }

    #[test]
    fn test_export_writes_png() {
        let grid = GlyphGrid::from_rows(vec!["@. ".into(), "#%@".into()]).unwrap();
        let policy = StylePolicy::for_ramp(&GlyphRamp::Monochrome);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("art.png");

        let written = export(&grid, None, &policy, &FontSpec::default(), &path, &|_| {}).unwrap();

        assert_eq!(written, path);
        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.width() % grid.width() as u32, 0);
        assert_eq!(decoded.height() % grid.height() as u32, 0);
    }
}
