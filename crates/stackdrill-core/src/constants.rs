//! Worksheet related constants
//!
//! Note: markup tokens are kept here as well so the serializer and the
//! extractor can never disagree on the grammar.

use std::ops::RangeInclusive;

// =============================================================================
// Problem synthesis
// =============================================================================

/// Smallest number of operands in a problem
pub const MIN_OPERANDS: usize = 2;

/// Largest number of operands in a problem
pub const MAX_OPERANDS: usize = 4;

/// First operand range for two-operand problems
pub const TWO_OPERAND_FIRST_RANGE: RangeInclusive<u32> = 10..=999;

/// Second operand range for two-operand problems
pub const TWO_OPERAND_SECOND_RANGE: RangeInclusive<u32> = 1..=99;

/// Operand range for three and four operand problems
pub const MULTI_OPERAND_RANGE: RangeInclusive<u32> = 1..=99;

/// Amount added to the subtrahend when the minuend has to be replaced
pub const SUBTRACTION_BUMP_RANGE: RangeInclusive<u32> = 10..=50;

// =============================================================================
// Document assembly
// =============================================================================

/// Problems per worksheet row
pub const PROBLEMS_PER_ROW: usize = 5;

/// Default number of problems requested (10 rows)
pub const DEFAULT_TOTAL_PROBLEMS: usize = 50;

/// Default maximum stack height
pub const DEFAULT_MAX_OPERANDS: usize = 4;

/// Default markup output path
pub const DEFAULT_OUTPUT_PATH: &str = "output.tex";

// =============================================================================
// Markup grammar
// =============================================================================

pub const DOCUMENT_ENV: &str = "document";
pub const TABLE_ENV: &str = "tabular";
pub const ARRAY_ENV: &str = "array";

/// Math span delimiter
pub const MATH_DELIMITER: char = '$';

/// Line continuation inside an array
pub const LINE_BREAK: &str = "\\\\";

/// Horizontal rule marker
pub const RULE_MARKER: &str = "\\hline";

/// Cell separator
pub const COLUMN_SEPARATOR: char = '&';

// =============================================================================
// Block layout
// =============================================================================

/// Minimum rule length in characters
pub const MIN_RULE_WIDTH: usize = 5;

/// Width of the operator column (sign + space)
pub const OPERATOR_COLUMN_WIDTH: usize = 2;

/// Character a rule line is drawn with
pub const RULE_CHAR: char = '-';

// =============================================================================
// Raster output
// =============================================================================

/// Glyph cell size of the built-in bitmap font (pixels)
pub const GLYPH_SIZE: u32 = 8;

/// Default integer scale applied to glyphs
pub const DEFAULT_GLYPH_SCALE: u32 = 3;

/// Default padding around each grid cell (pixels, unscaled)
pub const DEFAULT_CELL_PADDING: u32 = 16;

/// Default spacing between text lines (pixels, unscaled)
pub const DEFAULT_LINE_SPACING: u32 = 2;

/// Largest glyph scale the renderer CLI accepts
pub const MAX_GLYPH_SCALE: u32 = 32;

/// Largest canvas the renderer allocates (pixels, one byte each)
pub const MAX_RASTER_PIXELS: u64 = 100_000_000;
