//! Pipeline error types.
//!
//! Fatal conditions are surfaced to the caller; recoverable ones (missing
//! fonts, out-of-range color samples) are absorbed locally and never appear
//! here.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced by the conversion and export pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Requested grid dimensions are unusable (zero width, or a resize that
    /// would collapse the grid to zero rows).
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// An output file could not be created or written. Fatal only to the
    /// exporter that hit it; other exporters in the same run keep going.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Image encoding failed while saving a raster export.
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

impl RenderError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        RenderError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
