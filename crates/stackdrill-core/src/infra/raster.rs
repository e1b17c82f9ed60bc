//! Raster output
//!
//! Draws pre-aligned text blocks into a grayscale grid using the built-in
//! 8x8 bitmap font and writes the image to disk. Each block is right-aligned
//! and vertically centred in its cell; every cell has the size of the
//! largest block.

use crate::constants::{
    DEFAULT_CELL_PADDING, DEFAULT_GLYPH_SCALE, DEFAULT_LINE_SPACING, GLYPH_SIZE,
    MAX_RASTER_PIXELS,
};
use crate::domain::grid::GridShape;
use font8x8::{BASIC_FONTS, UnicodeFonts};
use image::{GrayImage, ImageFormat, Luma};
use log::{debug, trace};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

const BACKGROUND: Luma<u8> = Luma([255]);
const INK: Luma<u8> = Luma([0]);

/// Raster layout options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterOptions {
    /// Integer glyph scale (1 = 8px glyphs)
    pub glyph_scale: u32,
    /// Padding around each cell, before scaling
    pub cell_padding: u32,
    /// Gap between text lines, before scaling
    pub line_spacing: u32,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            glyph_scale: DEFAULT_GLYPH_SCALE,
            cell_padding: DEFAULT_CELL_PADDING,
            line_spacing: DEFAULT_LINE_SPACING,
        }
    }
}

/// Raster errors
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Nothing to render: the grid has no cells")]
    EmptyGrid,
    /// Canvas exceeds `MAX_RASTER_PIXELS` or does not fit in `u32`
    #[error(
        "Image of {width}x{height} px is too large to render (limit {} px)",
        MAX_RASTER_PIXELS
    )]
    TooLarge { width: u64, height: u64 },
    #[error("Unsupported image format for '{}'", .path.display())]
    UnsupportedFormat { path: PathBuf },
    /// Encoding or writing the image failed
    #[error("Failed to write image '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Failed to write image '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Pixel sizes of one render
///
/// Sizes are computed in `u64` with saturating arithmetic and only narrowed
/// to `u32` once the canvas is known to fit the pixel budget, so every
/// coordinate derived from them stays in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CanvasMetrics {
    scale: u32,
    glyph: u32,
    padding: u32,
    spacing: u32,
    line_height: u32,
    cell_width: u32,
    cell_height: u32,
    width: u32,
    height: u32,
}

impl CanvasMetrics {
    fn measure(
        shape: GridShape,
        max_columns: u32,
        max_lines: u32,
        options: &RasterOptions,
    ) -> Result<Self, RasterError> {
        let scale = u64::from(options.glyph_scale.max(1));
        let glyph = u64::from(GLYPH_SIZE).saturating_mul(scale);
        let padding = u64::from(options.cell_padding).saturating_mul(scale);
        let spacing = u64::from(options.line_spacing).saturating_mul(scale);
        let line_height = glyph.saturating_add(spacing);

        let cell_width = u64::from(max_columns)
            .saturating_mul(glyph)
            .saturating_add(padding.saturating_mul(2));
        let cell_height = u64::from(max_lines)
            .saturating_mul(line_height)
            .saturating_add(padding.saturating_mul(2));
        let width = (shape.columns as u64).saturating_mul(cell_width);
        let height = (shape.rows as u64).saturating_mul(cell_height);

        let too_large = || RasterError::TooLarge { width, height };
        if width.saturating_mul(height) > MAX_RASTER_PIXELS {
            return Err(too_large());
        }
        let narrow = |value: u64| u32::try_from(value).map_err(|_| too_large());

        Ok(Self {
            scale: narrow(scale)?,
            glyph: narrow(glyph)?,
            padding: narrow(padding)?,
            spacing: narrow(spacing)?,
            line_height: narrow(line_height)?,
            cell_width: narrow(cell_width)?,
            cell_height: narrow(cell_height)?,
            width: narrow(width)?,
            height: narrow(height)?,
        })
    }
}

fn char_count(line: &str) -> u32 {
    line.chars().count() as u32
}

fn block_columns(lines: &[String]) -> u32 {
    lines.iter().map(|line| char_count(line)).max().unwrap_or(0)
}

fn draw_glyph(image: &mut GrayImage, x: u32, y: u32, c: char, scale: u32) {
    let Some(glyph) = BASIC_FONTS.get(c) else {
        trace!("No glyph for {:?}", c);
        return;
    };

    let (width, height) = image.dimensions();
    for (gy, &row) in glyph.iter().enumerate() {
        for gx in 0..GLYPH_SIZE {
            if row & (1u8 << gx) == 0 {
                continue;
            }
            let px = x + gx * scale;
            let py = y + gy as u32 * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    if px + dx < width && py + dy < height {
                        image.put_pixel(px + dx, py + dy, INK);
                    }
                }
            }
        }
    }
}

fn draw_line(image: &mut GrayImage, x: u32, y: u32, line: &str, metrics: &CanvasMetrics) {
    for (i, c) in line.chars().enumerate() {
        draw_glyph(image, x + i as u32 * metrics.glyph, y, c, metrics.scale);
    }
}

/// Render text blocks into a grid
///
/// `cells[i]` is placed in grid position `i`, filled row by row. Blocks
/// beyond the grid's capacity are ignored.
pub fn render_grid(
    shape: GridShape,
    cells: &[Vec<String>],
    options: &RasterOptions,
) -> Result<GrayImage, RasterError> {
    if shape.cell_count() == 0 || cells.is_empty() {
        return Err(RasterError::EmptyGrid);
    }

    let max_columns = cells.iter().map(|c| block_columns(c)).max().unwrap_or(0);
    let max_lines = cells.iter().map(|c| c.len() as u32).max().unwrap_or(0);
    let metrics = CanvasMetrics::measure(shape, max_columns, max_lines, options)?;

    debug!(
        "Rendering {} blocks into {}x{} grid ({}x{} px)",
        cells.len(),
        shape.rows,
        shape.columns,
        metrics.width,
        metrics.height
    );

    let mut image = GrayImage::from_pixel(metrics.width, metrics.height, BACKGROUND);

    for (index, lines) in cells.iter().enumerate() {
        let Some((row, column)) = shape.position(index) else {
            break;
        };

        let columns = block_columns(lines);
        let block_width = columns * metrics.glyph;
        let block_height =
            (lines.len() as u32 * metrics.line_height).saturating_sub(metrics.spacing);

        let left = column as u32 * metrics.cell_width + metrics.cell_width
            - metrics.padding
            - block_width;
        let top = row as u32 * metrics.cell_height + (metrics.cell_height - block_height) / 2;

        for (i, line) in lines.iter().enumerate() {
            let x = left + (columns - char_count(line)) * metrics.glyph;
            let y = top + i as u32 * metrics.line_height;
            draw_line(&mut image, x, y, line, &metrics);
        }
    }

    Ok(image)
}

/// Write an image, format chosen by extension
///
/// A partially written file is removed when encoding fails.
pub fn save_raster(path: impl AsRef<Path>, image: &GrayImage) -> Result<(), RasterError> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path).map_err(|_| RasterError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let file = File::create(path).map_err(|source| RasterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let result = image
        .write_to(&mut writer, format)
        .map_err(|source| RasterError::Write {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|_| {
            writer.flush().map_err(|source| RasterError::Io {
                path: path.to_path_buf(),
                source,
            })
        });
    drop(writer);

    if result.is_err() {
        fs::remove_file(path).ok();
    }
    result
}
