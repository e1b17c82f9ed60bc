//! Worksheet generation workflow
//!
//! This module provides functions for generating complete worksheet documents.

use crate::constants::{DEFAULT_MAX_OPERANDS, DEFAULT_TOTAL_PROBLEMS, PROBLEMS_PER_ROW};
use crate::domain::markup::{Document, SerializedBlock, assemble, serialize};
use crate::domain::problem::{Operation, Problem, ProblemError, clamp_max_operands, synthesize};
use log::debug;
use rand::Rng;

/// Worksheet generation options
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOptions {
    pub operation: Operation,
    /// Maximum stack height (clamped to 2..=4)
    pub max_operands: usize,
    /// Requested problem count, rounded up to whole rows
    pub total_problems: usize,
    pub per_row: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            operation: Operation::Add,
            max_operands: DEFAULT_MAX_OPERANDS,
            total_problems: DEFAULT_TOTAL_PROBLEMS,
            per_row: PROBLEMS_PER_ROW,
        }
    }
}

impl GenerateOptions {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            ..Self::default()
        }
    }

    /// Rows the requested total rounds up to
    pub fn rows(&self) -> usize {
        rows_for_total(self.total_problems, self.per_row)
    }

    /// Problems actually generated
    pub fn problem_count(&self) -> usize {
        self.rows() * self.per_row.max(1)
    }
}

/// Generated problems and their document
#[derive(Clone, Debug)]
pub struct Worksheet {
    pub problems: Vec<Problem>,
    pub document: Document,
}

impl Worksheet {
    /// `problem = answer` lines in document order
    pub fn answer_key(&self) -> impl Iterator<Item = String> + '_ {
        self.problems
            .iter()
            .map(|problem| format!("{} = {}", problem, problem.answer()))
    }
}

/// Ceiling division of `total` by `per_row`, at least one row
pub fn rows_for_total(total: usize, per_row: usize) -> usize {
    total.div_ceil(per_row.max(1)).max(1)
}

/// Generate a worksheet
pub fn generate_worksheet<R: Rng + ?Sized>(
    rng: &mut R,
    options: &GenerateOptions,
) -> Result<Worksheet, ProblemError> {
    generate_worksheet_with_progress(rng, options, |_, _| {})
}

/// Generate a worksheet with progress callback
pub fn generate_worksheet_with_progress<R, F>(
    rng: &mut R,
    options: &GenerateOptions,
    mut on_progress: F,
) -> Result<Worksheet, ProblemError>
where
    R: Rng + ?Sized,
    F: FnMut(usize, usize), // (current, total)
{
    let max_operands = clamp_max_operands(options.max_operands);
    let total = options.problem_count();

    let mut problems = Vec::with_capacity(total);
    for i in 0..total {
        problems.push(synthesize(rng, options.operation, max_operands)?);
        on_progress(i + 1, total);
    }

    let blocks: Vec<SerializedBlock> = problems.iter().map(serialize).collect();
    let document = assemble(&blocks, options.per_row.max(1));

    debug!(
        "Generated {} problems in {} rows ({:?}, max {} operands)",
        problems.len(),
        document.rows(),
        options.operation,
        max_operands
    );

    Ok(Worksheet { problems, document })
}

/// Generate only the document
pub fn generate_document<R: Rng + ?Sized>(
    rng: &mut R,
    options: &GenerateOptions,
) -> Result<Document, ProblemError> {
    generate_worksheet(rng, options).map(|worksheet| worksheet.document)
}
