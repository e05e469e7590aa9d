//! Per-cell color sampling.
//!
//! Aligns a color image to the glyph grid and yields one RGB triple per
//! cell. Coordinates that fall outside the resized color image (possible
//! when the two resize operations round differently) return white instead
//! of failing.

use image::{imageops::FilterType, DynamicImage, RgbImage};

use crate::palette::{self, Rgb};

const FALLBACK: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Read-only color source aligned to a glyph grid.
pub struct ColorSampler {
    pixels: RgbImage,
    palette_constrained: bool,
}

impl ColorSampler {
    /// Resize the color image to the grid dimensions. When
    /// `palette_constrained` is set, every sampled color passes through the
    /// retro palette so the constraint is visible in exported output, not
    /// just in preprocessing.
    pub fn new(
        color_image: &DynamicImage,
        grid_width: usize,
        grid_height: usize,
        palette_constrained: bool,
    ) -> Self {
        let pixels = color_image
            .resize_exact(grid_width as u32, grid_height as u32, FilterType::Lanczos3)
            .to_rgb8();
        Self {
            pixels,
            palette_constrained,
        }
    }

    /// Color for the cell at (row, col), white when out of bounds.
    pub fn color_at(&self, row: usize, col: usize) -> Rgb {
        if col < self.pixels.width() as usize && row < self.pixels.height() as usize {
            let pixel = self.pixels.get_pixel(col as u32, row as u32);
            let color = Rgb::new(pixel[0], pixel[1], pixel[2]);
            if self.palette_constrained {
                palette::nearest(color)
            } else {
                color
            }
        } else {
            FALLBACK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::RETRO_PALETTE;

    fn red_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(
            width,
            height,
            image::Rgb([200, 10, 10]),
        ))
    }

    #[test]
    fn test_in_bounds_sampling() {
        let sampler = ColorSampler::new(&red_image(20, 20), 10, 5, false);
        let color = sampler.color_at(2, 3);
        assert!(color.r > color.g && color.r > color.b);
    }

    #[test]
    fn test_out_of_bounds_is_white() {
        let sampler = ColorSampler::new(&red_image(20, 20), 10, 5, false);
        assert_eq!(sampler.color_at(5, 0), FALLBACK);
        assert_eq!(sampler.color_at(0, 10), FALLBACK);
        assert_eq!(sampler.color_at(999, 999), FALLBACK);
    }

    #[test]
    fn test_palette_constrained_sampling() {
        let sampler = ColorSampler::new(&red_image(20, 20), 10, 5, true);
        for row in 0..5 {
            for col in 0..10 {
                assert!(RETRO_PALETTE.contains(&sampler.color_at(row, col)));
            }
        }
    }
}
