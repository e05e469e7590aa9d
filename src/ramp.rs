//! Glyph ramps
//!
//! Ordered glyph sequences from darkest to lightest, with intensity-to-glyph
//! mapping.

use serde::{Deserialize, Serialize};

/// A glyph ramp: index 0 renders the darkest pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlyphRamp {
    /// Dense-to-sparse punctuation: "@%#*+=-:. "
    Monochrome,
    /// Unicode block elements: "█▓▒░ "
    Block,
    /// Dot glyphs: "•· "
    Dots,
    /// Full alphanumeric sweep for fine gradients
    Alphanumeric,
    /// Blocky pixel glyphs used by the retro style
    Retro,
    /// Custom user-defined glyph sequence (sorted dark to light)
    Custom(String),
}

impl Default for GlyphRamp {
    fn default() -> Self {
        GlyphRamp::Monochrome
    }
}

impl GlyphRamp {
    /// Build a custom ramp. An empty sequence falls back to the monochrome
    /// preset instead of producing a degenerate ramp.
    pub fn custom(glyphs: &str) -> Self {
        if glyphs.is_empty() {
            GlyphRamp::Monochrome
        } else {
            GlyphRamp::Custom(glyphs.to_string())
        }
    }

    pub fn name(&self) -> &str {
        match self {
            GlyphRamp::Monochrome => "monochrome",
            GlyphRamp::Block => "block",
            GlyphRamp::Dots => "dots",
            GlyphRamp::Alphanumeric => "alphanumeric",
            GlyphRamp::Retro => "retro",
            GlyphRamp::Custom(_) => "custom",
        }
    }

    /// Parse a style tag into a preset ramp.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "monochrome" => Some(GlyphRamp::Monochrome),
            "block" => Some(GlyphRamp::Block),
            "dots" => Some(GlyphRamp::Dots),
            "alphanumeric" => Some(GlyphRamp::Alphanumeric),
            "retro" => Some(GlyphRamp::Retro),
            _ => None,
        }
    }

    pub fn glyphs(&self) -> &str {
        match self {
            GlyphRamp::Monochrome => "@%#*+=-:. ",
            GlyphRamp::Block => "█▓▒░ ",
            GlyphRamp::Dots => "•· ",
            GlyphRamp::Alphanumeric => {
                "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ9876543210?!;:,. "
            }
            GlyphRamp::Retro => "█▓▒░▀▄",
            // Empty custom ramps fall back to the monochrome preset so the
            // mapping stays total.
            GlyphRamp::Custom(glyphs) if glyphs.is_empty() => "@%#*+=-:. ",
            GlyphRamp::Custom(glyphs) => glyphs,
        }
    }

    /// Map an intensity sample to a glyph.
    ///
    /// The index is `floor(intensity / 255 * (len - 1))`, monotonic and total
    /// over 0..=255. A single-glyph ramp maps everything to that glyph.
    pub fn glyph_for(&self, intensity: u8) -> char {
        let glyphs: Vec<char> = self.glyphs().chars().collect();
        let index = intensity as usize * (glyphs.len() - 1) / 255;
        glyphs[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        let ramp = GlyphRamp::Monochrome;
        assert_eq!(ramp.glyph_for(0), '@');
        assert_eq!(ramp.glyph_for(255), ' ');
    }

    #[test]
    fn test_mapping_matches_floor_formula() {
        let ramp = GlyphRamp::Block;
        let glyphs: Vec<char> = ramp.glyphs().chars().collect();
        for intensity in 0..=255u16 {
            let expected =
                (intensity as f64 / 255.0 * (glyphs.len() - 1) as f64).floor() as usize;
            assert_eq!(ramp.glyph_for(intensity as u8), glyphs[expected]);
        }
    }

    #[test]
    fn test_monotonic() {
        let ramp = GlyphRamp::Alphanumeric;
        let glyphs: Vec<char> = ramp.glyphs().chars().collect();
        let mut last = 0usize;
        for intensity in 0..=255u16 {
            let glyph = ramp.glyph_for(intensity as u8);
            let index = glyphs.iter().position(|&g| g == glyph).unwrap();
            assert!(index >= last);
            last = index;
        }
    }

    #[test]
    fn test_single_glyph_ramp() {
        let ramp = GlyphRamp::custom("#");
        assert_eq!(ramp.glyph_for(0), '#');
        assert_eq!(ramp.glyph_for(128), '#');
        assert_eq!(ramp.glyph_for(255), '#');
    }

    #[test]
    fn test_empty_custom_falls_back() {
        let ramp = GlyphRamp::custom("");
        assert_eq!(ramp, GlyphRamp::Monochrome);
        // Even a directly constructed empty Custom stays total.
        assert_eq!(GlyphRamp::Custom(String::new()).glyph_for(0), '@');
    }

    #[test]
    fn test_tag_parsing() {
        assert_eq!(GlyphRamp::from_tag("retro"), Some(GlyphRamp::Retro));
        assert_eq!(GlyphRamp::from_tag("block"), Some(GlyphRamp::Block));
        assert_eq!(GlyphRamp::from_tag("oilpaint"), None);
    }
}
