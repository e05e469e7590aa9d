//! Glyphcast - image to glyph-grid conversion and multi-format export.
//!
//! Maps pixel intensity to glyphs, optionally constrains colors to a retro
//! palette, and serializes the resulting grid to text, PNG, SVG, and HTML
//! concurrently with live progress.

pub mod ansi;
pub mod config;
pub mod error;
pub mod export;
pub mod grid;
pub mod image_loader;
pub mod palette;
pub mod progress;
pub mod ramp;
pub mod retro;
pub mod sampler;
pub mod style;

// Re-export commonly used types
pub use config::Config;
pub use error::{RenderError, Result};
pub use export::{run_exports, ExportFormat, FontSpec};
pub use grid::{build_grid, GlyphGrid};
pub use ramp::GlyphRamp;
pub use style::StylePolicy;
