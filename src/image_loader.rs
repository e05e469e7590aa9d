//! Image loading utilities
//!
//! Decodes the source image for the pipeline and validates its extension.

use anyhow::{bail, Context, Result};
use image::DynamicImage;
use std::path::Path;

/// Get supported image format extensions
pub fn supported_extensions() -> &'static [&'static str] {
    &["png", "jpg", "jpeg", "gif", "webp"]
}

/// Check if a file extension is a supported image format
pub fn is_supported_format(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext_lower = ext.to_lowercase();
            supported_extensions().iter().any(|&e| e == ext_lower)
        })
        .unwrap_or(false)
}

/// Decode the source image for a conversion run.
///
/// Rejects unsupported extensions up front so the error names the real
/// problem instead of a decoder failure.
pub fn load_source(path: &Path) -> Result<DynamicImage> {
    if !is_supported_format(path) {
        bail!(
            "unsupported image extension in {:?} (supported: {})",
            path,
            supported_extensions().join(", ")
        );
    }
    let img = image::open(path).with_context(|| format!("Failed to load image: {:?}", path))?;
    Ok(img)
}
