//! Main entry point for the glyphcast converter
//!
//! Loads an image, builds the glyph grid, and fans it out to the selected
//! exporters with a console progress display.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use glyphcast::{
    ansi,
    config::Config,
    export::{parse_formats, run_exports, FontSpec},
    grid::build_grid,
    image_loader,
    progress::ConsoleSink,
    ramp::GlyphRamp,
    retro,
    sampler::ColorSampler,
    style::StylePolicy,
};

fn main() -> Result<()> {
    env_logger::init();

    // Simple CLI parsing for convenience
    let mut arg_image: Option<PathBuf> = None;
    let mut arg_width: Option<u32> = None;
    let mut arg_style: Option<String> = None;
    let mut arg_chars: Option<String> = None;
    let mut arg_no_color = false;
    let mut arg_formats: Option<String> = None;
    let mut arg_out_dir: Option<PathBuf> = None;
    let mut arg_font: Option<PathBuf> = None;
    let mut arg_font_size: Option<f32> = None;
    let mut arg_preview = false;

    let mut iter = std::env::args().skip(1);
    while let Some(a) = iter.next() {
        match a.as_str() {
            "--image" => arg_image = iter.next().map(PathBuf::from),
            "--width" => arg_width = iter.next().and_then(|v| v.parse().ok()),
            "--style" => arg_style = iter.next(),
            "--chars" => arg_chars = iter.next(),
            "--no-color" => arg_no_color = true,
            "--formats" => arg_formats = iter.next(),
            "--out-dir" => arg_out_dir = iter.next().map(PathBuf::from),
            "--font" => arg_font = iter.next().map(PathBuf::from),
            "--font-size" => arg_font_size = iter.next().and_then(|v| v.parse().ok()),
            "--preview" => arg_preview = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => {
                eprintln!("Unknown argument '{}'", other);
                print_usage();
                bail!("unknown argument");
            }
        }
    }

    let Some(image_path) = arg_image else {
        print_usage();
        bail!("--image is required");
    };

    // Load configuration; CLI arguments win over saved preferences.
    let config = Config::load().unwrap_or_default();

    let width = arg_width.unwrap_or(config.conversion.default_width);
    let apply_color = !arg_no_color && config.conversion.apply_color;

    let ramp = match arg_chars {
        Some(chars) => GlyphRamp::custom(&chars),
        None => {
            let tag = arg_style
                .as_deref()
                .unwrap_or(&config.conversion.default_style);
            GlyphRamp::from_tag(tag)
                .with_context(|| format!("unrecognized style '{tag}'"))?
        }
    };
    let policy = StylePolicy::for_ramp(&ramp);

    let format_tags: Vec<String> = match arg_formats {
        Some(csv) => csv.split(',').map(|tag| tag.trim().to_string()).collect(),
        None => config.export.formats.clone(),
    };
    let formats = parse_formats(&format_tags);
    if formats.is_empty() {
        bail!("no recognized output formats in {:?}", format_tags);
    }

    let source = image_loader::load_source(&image_path)?;

    // The retro style pixelates and palette-quantizes the source before
    // conversion when color is on; the preprocessed image then feeds both
    // glyph selection and color sampling.
    let processed = if ramp == GlyphRamp::Retro && apply_color {
        retro::preprocess(&source, config.conversion.retro_resolution)
    } else {
        source
    };

    let grid = build_grid(&processed, width, &ramp)?;
    let sampler = apply_color.then(|| {
        ColorSampler::new(
            &processed,
            grid.width(),
            grid.height(),
            policy.palette_constrained,
        )
    });

    if arg_preview {
        for line in ansi::render_ansi(&grid, sampler.as_ref()) {
            println!("{line}");
        }
    }

    let base_name = image_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("output")
        .to_string();
    let output_dir = arg_out_dir.unwrap_or_else(|| {
        image_path
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(format!("{base_name}_ascii"))
    });

    let font = FontSpec {
        path: arg_font.or(config.export.font_path.clone()),
        size: arg_font_size.unwrap_or(config.export.font_size),
    };

    log::info!(
        "converting {:?}: {}x{} grid, style {}, color {}",
        image_path,
        grid.width(),
        grid.height(),
        ramp.name(),
        if apply_color { "on" } else { "off" }
    );

    let outcomes = run_exports(
        &grid,
        sampler.as_ref(),
        &policy,
        &font,
        &formats,
        &output_dir,
        &base_name,
        Box::new(ConsoleSink),
    )?;

    println!("\nConversion Summary:");
    println!("{}", "=".repeat(60));
    println!("Source Image: {:?}", image_path);
    println!("Grid: {} x {} characters", grid.width(), grid.height());
    println!("Style: {}", ramp.name());
    println!(
        "Color Mode: {}",
        if apply_color { "Enabled" } else { "Disabled" }
    );
    println!("\nOutput Files:");
    let mut failures = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(path) => println!("  {} -> {:?} ({})", outcome.format.tag(), path, file_size(path)),
            Err(e) => {
                failures += 1;
                eprintln!("  {} failed: {}", outcome.format.tag(), e);
            }
        }
    }
    println!("{}", "=".repeat(60));

    if failures > 0 {
        bail!("{failures} of {} exports failed", outcomes.len());
    }
    Ok(())
}

fn print_usage() {
    eprintln!(
        "Usage: glyphcast --image <path> [options]\n\
         \n\
         Options:\n\
           --width <n>        target character width (default 100)\n\
           --style <name>     monochrome | block | dots | alphanumeric | retro\n\
           --chars <set>      custom glyphs from dark to light (overrides --style)\n\
           --no-color         disable per-cell color sampling\n\
           --formats <csv>    subset of text,raster,vector,markup\n\
           --out-dir <dir>    output directory (default <image dir>/<name>_ascii)\n\
           --font <path>      TrueType font for the raster export\n\
           --font-size <px>   font size for raster/vector exports (default 10)\n\
           --preview          print an ANSI preview before exporting"
    );
}

fn file_size(path: &std::path::Path) -> String {
    match std::fs::metadata(path) {
        Ok(meta) => {
            let size = meta.len();
            if size < 1024 {
                format!("{size} bytes")
            } else if size < 1024 * 1024 {
                format!("{:.1} KB", size as f64 / 1024.0)
            } else {
                format!("{:.1} MB", size as f64 / (1024.0 * 1024.0))
            }
        }
        Err(_) => "N/A".to_string(),
    }
}
