//! Retro preprocessing pass.
//!
//! Downscales to a fixed low resolution with nearest-neighbor interpolation
//! (deliberately blocky), quantizes every pixel through the retro palette,
//! and overlays a scanline darkening pattern.

use image::{imageops::FilterType, DynamicImage};

use crate::palette::{self, Rgb};

/// Default pixelation resolution for the retro style.
pub const RETRO_RESOLUTION: u32 = 128;

/// Phosphor dim factor applied to even-indexed rows.
const SCANLINE_DIM: f32 = 0.9;

/// Produce the pixelated, palette-constrained, scanlined image.
///
/// Horizontal and vertical scale factors are independent, so non-square
/// sources are stretched to `target_resolution` on both axes rather than
/// letterboxed. The result feeds both glyph selection (via luma conversion)
/// and color sampling.
pub fn preprocess(image: &DynamicImage, target_resolution: u32) -> DynamicImage {
    let scaled = image.resize_exact(target_resolution, target_resolution, FilterType::Nearest);
    let mut pixels = scaled.to_rgb8();

    for (_, y, pixel) in pixels.enumerate_pixels_mut() {
        let quantized = palette::nearest(Rgb::new(pixel[0], pixel[1], pixel[2]));
        let (mut r, mut g, mut b) = quantized.to_tuple();
        if y % 2 == 0 {
            r = (r as f32 * SCANLINE_DIM) as u8;
            g = (g as f32 * SCANLINE_DIM) as u8;
            b = (b as f32 * SCANLINE_DIM) as u8;
        }
        *pixel = image::Rgb([r, g, b]);
    }

    DynamicImage::ImageRgb8(pixels)
}
