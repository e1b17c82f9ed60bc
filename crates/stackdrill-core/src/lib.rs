//! stackdrill-core - Arithmetic stack worksheet generation and rendering
//!
//! This crate provides functionality to:
//! - Generate random column addition/subtraction problems
//! - Serialize them into LaTeX-style array blocks tiled into a document
//! - Extract and lay out those blocks again and render them to an image
//!
//! Problems with three or four operands are always addition problems,
//! whatever operation was requested.

pub mod app;
pub mod constants;
pub mod domain;
pub mod infra;

// Re-export commonly used types
pub use app::generator::{GenerateOptions, Worksheet, generate_worksheet};
pub use app::renderer::{RenderError, RenderSummary, render_markup_file};
pub use domain::extract::extract;
pub use domain::grid::GridShape;
pub use domain::layout::{LayoutSpec, ParsedBlock, ParsedLine, parse_block};
pub use domain::markup::{Document, SerializedBlock, assemble, serialize};
pub use domain::problem::{Operation, Operator, Problem, ProblemError, synthesize};
pub use infra::raster::RasterOptions;
