//! Worksheet rendering workflow
//!
//! markup text → array blocks → parsed layouts → raster grid.

use crate::domain::extract::extract;
use crate::domain::grid::GridShape;
use crate::domain::layout::{ParsedBlock, parse_block};
use crate::infra::markup_io::{MarkupIoError, load_markup};
use crate::infra::raster::{RasterError, RasterOptions, render_grid, save_raster};
use image::GrayImage;
use log::debug;
use rayon::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Markup(#[from] MarkupIoError),
    #[error("No array environments found in the input")]
    NoBlocksFound,
    #[error(transparent)]
    Raster(#[from] RasterError),
}

/// Result of a successful render
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderSummary {
    pub block_count: usize,
    pub shape: GridShape,
    pub width: u32,
    pub height: u32,
}

/// Extract and parse every block
pub fn layout_markup(text: &str) -> Vec<ParsedBlock> {
    extract(text).iter().map(|raw| parse_block(raw)).collect()
}

/// Extract and parse every block in parallel
///
/// Blocks are independent; output keeps document order.
pub fn layout_markup_parallel(text: &str) -> Vec<ParsedBlock> {
    extract(text).par_iter().map(|raw| parse_block(raw)).collect()
}

fn render_blocks(
    blocks: &[ParsedBlock],
    options: &RasterOptions,
) -> Result<(GrayImage, GridShape), RenderError> {
    if blocks.is_empty() {
        return Err(RenderError::NoBlocksFound);
    }

    let shape = GridShape::for_block_count(blocks.len());
    let cells: Vec<Vec<String>> = blocks.iter().map(ParsedBlock::display_lines).collect();
    debug!("Laid out {} blocks as {:?}", blocks.len(), shape);

    let image = render_grid(shape, &cells, options)?;
    Ok((image, shape))
}

/// Render markup text into an image
pub fn render_markup(text: &str, options: &RasterOptions) -> Result<GrayImage, RenderError> {
    let blocks = layout_markup_parallel(text);
    render_blocks(&blocks, options).map(|(image, _)| image)
}

/// Render a markup file into an image file
///
/// Nothing is written when the input is missing or holds no blocks.
pub fn render_markup_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &RasterOptions,
) -> Result<RenderSummary, RenderError> {
    let text = load_markup(input)?;
    let blocks = layout_markup_parallel(&text);
    let (image, shape) = render_blocks(&blocks, options)?;
    save_raster(output, &image)?;

    Ok(RenderSummary {
        block_count: blocks.len(),
        shape,
        width: image.width(),
        height: image.height(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout::ParsedLine;

    const FRAGMENT: &str = "$ \\begin{array}{r}\n 452  \\\\\n -37  \\\\\n \\hline \n\\end{array} $ & \
                            $ \\begin{array}{r}\n 12  \\\\\n 5  \\\\\n +9  \\\\\n \\hline \n\\end{array} $";

    #[test]
    fn test_layout_markup_order() {
        let blocks = layout_markup(FRAGMENT);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].number_count(), 2);
        assert_eq!(blocks[1].number_count(), 3);
        assert_eq!(blocks[1].lines.last(), Some(&ParsedLine::Rule));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let text = FRAGMENT.repeat(20);
        assert_eq!(layout_markup(&text), layout_markup_parallel(&text));
    }

    #[test]
    fn test_render_markup_no_blocks() {
        let result = render_markup("no math here", &RasterOptions::default());
        assert!(matches!(result, Err(RenderError::NoBlocksFound)));
    }

    #[test]
    fn test_render_markup_image() {
        let image = render_markup(FRAGMENT, &RasterOptions::default()).unwrap();
        assert!(image.width() > image.height());
    }
}
