//! Infrastructure layer - I/O and external dependencies
//!
//! This module handles file operations and raster output.

pub mod markup_io;
pub mod raster;
