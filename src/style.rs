//! Per-style export appearance.
//!
//! Background/foreground selection and palette constraint are resolved once
//! per run and handed to every exporter, instead of each exporter branching
//! on the style tag.

use crate::palette::Rgb;
use crate::ramp::GlyphRamp;

const SLATE: Rgb = Rgb { r: 43, g: 51, b: 56 };
const OFF_WHITE: Rgb = Rgb { r: 250, g: 250, b: 250 };
const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };
const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Resolved appearance for one conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylePolicy {
    pub background: Rgb,
    pub foreground: Rgb,
    /// Sampled colors must pass through the retro palette.
    pub palette_constrained: bool,
}

impl StylePolicy {
    /// Resolve the policy for a ramp. Block glyphs read best on a light
    /// background with dark ink; the retro style sits on pure black; every
    /// other style uses the dark slate background with off-white glyphs.
    pub fn for_ramp(ramp: &GlyphRamp) -> Self {
        match ramp {
            GlyphRamp::Block => Self {
                background: WHITE,
                foreground: BLACK,
                palette_constrained: false,
            },
            GlyphRamp::Retro => Self {
                background: BLACK,
                foreground: OFF_WHITE,
                palette_constrained: true,
            },
            _ => Self {
                background: SLATE,
                foreground: OFF_WHITE,
                palette_constrained: false,
            },
        }
    }
}
