//! Multi-format export coordination.
//!
//! The four exporters consume the same read-only glyph grid; the
//! coordinator fans a run out to one thread per selected format and folds
//! their progress into a single aggregator. A write failure in one format
//! is reported in that format's outcome without aborting the others.

pub mod bitmap_font;
pub mod markup;
pub mod raster;
pub mod text;
pub mod vector;

use std::path::{Path, PathBuf};
use std::thread;

use crate::error::{RenderError, Result};
use crate::grid::GlyphGrid;
use crate::progress::{ProgressAggregator, ProgressSink};
use crate::sampler::ColorSampler;
use crate::style::StylePolicy;

/// The closed set of output encodings. Adding a format is a compile-time
/// change: `dispatch` matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Text,
    Raster,
    Vector,
    Markup,
}

impl ExportFormat {
    pub fn all() -> [ExportFormat; 4] {
        [
            ExportFormat::Text,
            ExportFormat::Raster,
            ExportFormat::Vector,
            ExportFormat::Markup,
        ]
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text",
            ExportFormat::Raster => "raster",
            ExportFormat::Vector => "vector",
            ExportFormat::Markup => "markup",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Raster => "png",
            ExportFormat::Vector => "svg",
            ExportFormat::Markup => "html",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::all().into_iter().find(|format| format.tag() == tag)
    }
}

/// Parse requested format tags. Unknown tags are silently dropped, and
/// duplicates collapse to one job.
pub fn parse_formats<S: AsRef<str>>(tags: &[S]) -> Vec<ExportFormat> {
    let mut formats = Vec::new();
    for tag in tags {
        if let Some(format) = ExportFormat::from_tag(tag.as_ref()) {
            if !formats.contains(&format) {
                formats.push(format);
            }
        }
    }
    formats
}

/// Font identity and size for the raster/vector/markup exporters.
#[derive(Debug, Clone)]
pub struct FontSpec {
    pub path: Option<PathBuf>,
    pub size: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            path: None,
            size: 10.0,
        }
    }
}

/// Result of one dispatched export job.
#[derive(Debug)]
pub struct ExportOutcome {
    pub format: ExportFormat,
    pub result: Result<PathBuf>,
}

/// One output path paired with its format; created per selected format and
/// discarded once the file is written.
struct ExportJob {
    format: ExportFormat,
    path: PathBuf,
}

/// Export the grid to every selected format concurrently.
///
/// Output lands at `<output_dir>/<base_name>.<ext>`. The aggregator is
/// pre-registered with exactly the selected format tags; each job reports
/// per-row progress into it from its own thread. Returns one outcome per
/// format, in selection order, once every job has finished.
pub fn run_exports(
    grid: &GlyphGrid,
    sampler: Option<&ColorSampler>,
    policy: &StylePolicy,
    font: &FontSpec,
    formats: &[ExportFormat],
    output_dir: &Path,
    base_name: &str,
    sink: Box<dyn ProgressSink>,
) -> Result<Vec<ExportOutcome>> {
    std::fs::create_dir_all(output_dir).map_err(|e| RenderError::io(output_dir, e))?;

    let aggregator = ProgressAggregator::new(formats.iter().map(ExportFormat::tag), sink);
    let jobs: Vec<ExportJob> = formats
        .iter()
        .map(|&format| ExportJob {
            format,
            path: output_dir.join(format!("{base_name}.{}", format.extension())),
        })
        .collect();

    let (tx, rx) = crossbeam_channel::unbounded::<ExportOutcome>();

    thread::scope(|scope| {
        for job in &jobs {
            let tx = tx.clone();
            let aggregator = &aggregator;
            thread::Builder::new()
                .name(format!("export-{}", job.format.tag()))
                .spawn_scoped(scope, move || {
                    let report = |fraction: f64| aggregator.update(job.format.tag(), fraction);
                    let result = dispatch(job, grid, sampler, policy, font, &report);
                    let _ = tx.send(ExportOutcome {
                        format: job.format,
                        result,
                    });
                })
                .expect("Failed to spawn export thread");
        }
    });
    drop(tx);

    let mut outcomes: Vec<ExportOutcome> = rx.iter().collect();
    outcomes.sort_by_key(|outcome| {
        formats
            .iter()
            .position(|&format| format == outcome.format)
            .unwrap_or(usize::MAX)
    });
    Ok(outcomes)
}

fn dispatch(
    job: &ExportJob,
    grid: &GlyphGrid,
    sampler: Option<&ColorSampler>,
    policy: &StylePolicy,
    font: &FontSpec,
    report: &dyn Fn(f64),
) -> Result<PathBuf> {
    match job.format {
        ExportFormat::Text => text::export(grid, &job.path, report),
        ExportFormat::Raster => raster::export(grid, sampler, policy, font, &job.path, report),
        ExportFormat::Vector => vector::export(grid, sampler, policy, font.size, &job.path, report),
        ExportFormat::Markup => markup::export(grid, sampler, policy, &job.path, report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for format in ExportFormat::all() {
            assert_eq!(ExportFormat::from_tag(format.tag()), Some(format));
        }
    }

    #[test]
    fn test_unknown_tags_are_dropped() {
        let formats = parse_formats(&["text", "pdf", "markup", "docx"]);
        assert_eq!(formats, vec![ExportFormat::Text, ExportFormat::Markup]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let formats = parse_formats(&["vector", "vector", "text"]);
        assert_eq!(formats, vec![ExportFormat::Vector, ExportFormat::Text]);
    }

    #[test]
    fn test_extensions() {
        assert_eq!(ExportFormat::Text.extension(), "txt");
        assert_eq!(ExportFormat::Raster.extension(), "png");
        assert_eq!(ExportFormat::Vector.extension(), "svg");
        assert_eq!(ExportFormat::Markup.extension(), "html");
    }
}
