//! Glyph grid construction.
//!
//! Resizes an image to a target character width (correcting for glyph aspect
//! ratio) and maps pixel intensities to glyphs.

use image::{imageops::FilterType, DynamicImage, GenericImageView};

use crate::error::{RenderError, Result};
use crate::ramp::GlyphRamp;

/// Monospace glyphs are roughly twice as tall as wide; halving the computed
/// height preserves the visual aspect ratio.
const CHAR_ASPECT: f32 = 0.5;

/// A rectangular glyph grid. Immutable after construction; exporters share
/// it read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphGrid {
    rows: Vec<String>,
    width: usize,
}

impl GlyphGrid {
    /// Build a grid from pre-rendered rows, validating that every row has
    /// the same glyph count.
    pub fn from_rows(rows: Vec<String>) -> Result<Self> {
        let width = rows
            .first()
            .map(|row| row.chars().count())
            .ok_or_else(|| RenderError::InvalidDimension("grid has no rows".into()))?;
        if width == 0 {
            return Err(RenderError::InvalidDimension("grid rows are empty".into()));
        }
        for (i, row) in rows.iter().enumerate() {
            let count = row.chars().count();
            if count != width {
                return Err(RenderError::InvalidDimension(format!(
                    "row {i} has {count} glyphs, expected {width}"
                )));
            }
        }
        Ok(Self { rows, width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

/// Convert an image to a glyph grid at the requested character width.
///
/// Output height is `round(target_width * (orig_h / orig_w) * 0.5)`;
/// resampling uses Lanczos3 to avoid aliasing on downscale. Fails with
/// `InvalidDimension` when the width is zero or the corrected height rounds
/// to zero rows.
pub fn build_grid(image: &DynamicImage, target_width: u32, ramp: &GlyphRamp) -> Result<GlyphGrid> {
    if target_width == 0 {
        return Err(RenderError::InvalidDimension(
            "target width must be positive".into(),
        ));
    }

    let (orig_width, orig_height) = image.dimensions();
    let aspect_ratio = orig_height as f32 / orig_width as f32;
    let height = (target_width as f32 * aspect_ratio * CHAR_ASPECT).round() as u32;
    if height == 0 {
        return Err(RenderError::InvalidDimension(format!(
            "{orig_width}x{orig_height} source at width {target_width} yields a zero-height grid"
        )));
    }

    let resized = image.resize_exact(target_width, height, FilterType::Lanczos3);
    let gray = resized.to_luma8();

    let mut rows = Vec::with_capacity(height as usize);
    for y in 0..height {
        let mut line = String::with_capacity(target_width as usize);
        for x in 0..target_width {
            line.push(ramp.glyph_for(gray.get_pixel(x, y).0[0]));
        }
        rows.push(line);
    }

    Ok(GlyphGrid {
        rows,
        width: target_width as usize,
    })
}
