//! Worksheet rendering CLI
//!
//! Usage: stackdrill_render <input> <output> [--scale <N>]
//!
//! Reads a markup file, extracts its array blocks and draws them into a
//! grid image. The image format follows the output extension (png, jpg, bmp).
//!
//! Example: stackdrill_render output.tex output.png

use stackdrill_core::app::renderer::RenderError;
use stackdrill_core::constants::{DEFAULT_GLYPH_SCALE, MAX_GLYPH_SCALE};
use stackdrill_core::infra::markup_io::MarkupIoError;
use stackdrill_core::infra::raster::RasterError;
use stackdrill_core::{RasterOptions, render_markup_file};
use std::env;
use std::path::PathBuf;
use std::time::Instant;

struct Args {
    input: PathBuf,
    output: PathBuf,
    scale: u32,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <input> <output> [options]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <input>          Markup file containing array blocks");
    eprintln!("  <output>         Image file to write (.png, .jpg, .bmp)");
    eprintln!();
    eprintln!("Options:");
    eprintln!(
        "  --scale <N>      Glyph scale factor, 1-{} (default: {})",
        MAX_GLYPH_SCALE, DEFAULT_GLYPH_SCALE
    );
    eprintln!("  --help, -h       Show this help message");
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut positional: Vec<PathBuf> = Vec::new();
    let mut scale = DEFAULT_GLYPH_SCALE;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--scale" => {
                let value = args.get(i + 1).ok_or("Missing value for --scale")?;
                scale = value
                    .parse()
                    .ok()
                    .filter(|s| (1..=MAX_GLYPH_SCALE).contains(s))
                    .ok_or_else(|| {
                        format!("Invalid scale: {} (expected 1-{})", value, MAX_GLYPH_SCALE)
                    })?;
                i += 1;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => positional.push(PathBuf::from(arg)),
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    let mut positional = positional.into_iter();
    let input = positional.next().ok_or("Missing input argument")?;
    let output = positional.next().ok_or("Missing output argument")?;
    if let Some(extra) = positional.next() {
        return Err(format!("Unexpected argument: {}", extra.display()));
    }

    Ok(Args {
        input,
        output,
        scale,
    })
}

fn format_render_error(err: &RenderError) -> String {
    match err {
        RenderError::Markup(MarkupIoError::InputNotFound(path)) => {
            format!("Input file '{}' not found.", path.display())
        }
        RenderError::Markup(e) => format!("Error reading input file: {}", e),
        RenderError::NoBlocksFound => {
            "No LaTeX array environments found in the input file.".to_string()
        }
        RenderError::Raster(e @ RasterError::TooLarge { .. }) => {
            format!("{}. Try a smaller --scale.", e)
        }
        RenderError::Raster(e) => format!("Error saving image: {}", e),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&env::args().next().unwrap_or_default());
            std::process::exit(1);
        }
    };

    let options = RasterOptions {
        glyph_scale: args.scale,
        ..RasterOptions::default()
    };

    println!("Rendering {}...", args.input.display());
    let start = Instant::now();

    match render_markup_file(&args.input, &args.output, &options) {
        Ok(summary) => {
            println!(
                "Rendered {} blocks as a {}x{} grid ({}x{} px) in {:.2} seconds.",
                summary.block_count,
                summary.shape.rows,
                summary.shape.columns,
                summary.width,
                summary.height,
                start.elapsed().as_secs_f64()
            );
            println!(
                "Image successfully generated and saved to '{}'",
                args.output.display()
            );
        }
        Err(e) => {
            eprintln!("Error: {}", format_render_error(&e));
            std::process::exit(1);
        }
    }
}
