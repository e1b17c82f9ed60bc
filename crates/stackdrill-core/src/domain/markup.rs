//! Markup serialization
//!
//! Problems are written as right-aligned `array` environments inside
//! `$...$`, and tiled into a `tabular` inside a complete document.
//!
//! Block format:
//! ```text
//! $ \begin{array}{r}
//!  452  \\
//!  -37  \\
//!  \hline
//! \end{array} $
//! ```

use crate::constants::{ARRAY_ENV, COLUMN_SEPARATOR, LINE_BREAK, RULE_MARKER, TABLE_ENV};
use crate::domain::problem::Problem;

/// Serialized form of one problem
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SerializedBlock(String);

impl SerializedBlock {
    /// Full block text including the `$` delimiters
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `\begin{array}...\end{array}` part without delimiters
    pub fn array_environment(&self) -> &str {
        self.0.trim().trim_matches('$').trim()
    }
}

/// Assembled worksheet document
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    text: String,
    rows: usize,
}

impl Document {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of table rows (at least 1)
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// Serialize a problem into an array block
///
/// Every operand but the last goes on its own line; the last is prefixed
/// with the problem's final operator, followed by the rule line.
pub fn serialize(problem: &Problem) -> SerializedBlock {
    let operands = problem.operands();
    let (last, leading) = match operands.split_last() {
        Some(split) => split,
        None => return SerializedBlock(wrap_array(String::new())),
    };

    let mut parts: Vec<String> = leading.iter().map(|n| format!(" {} ", n)).collect();
    parts.push(format!(" {}{} ", problem.final_operator().as_char(), last));

    let separator = format!(" {}\n", LINE_BREAK);
    let mut body = parts.join(&separator);
    body.push_str(&separator);
    body.push(' ');
    body.push_str(RULE_MARKER);
    body.push(' ');

    SerializedBlock(wrap_array(body))
}

fn wrap_array(body: String) -> String {
    format!(
        "$ \\begin{{{env}}}{{r}}\n{body}\n\\end{{{env}}} $",
        env = ARRAY_ENV,
        body = body
    )
}

fn document_header(per_row: usize) -> String {
    format!(
        "\\documentclass{{article}}\n\
         \\usepackage{{amsmath}} % Required for the align environment, etc.\n\
         \\usepackage{{geometry}} % For page margins\n\
         \\geometry{{a4paper, margin=1in}} % Set margins\n\
         \n\
         \\begin{{document}}\n\
         \\centering\n\
         \n\
         \\begin{{{table}}}{{*{{{per_row}}}{{c}}}}\n",
        table = TABLE_ENV,
        per_row = per_row
    )
}

fn document_footer() -> String {
    format!("\\end{{{}}}\n\n\\end{{document}}", TABLE_ENV)
}

/// Tile blocks into a document, `per_row` cells per row
///
/// The last row keeps whatever is left over and is never padded. An empty
/// block list still produces one (empty) row. `per_row == 0` puts every
/// block in a single row.
pub fn assemble(blocks: &[SerializedBlock], per_row: usize) -> Document {
    let chunk = if per_row == 0 {
        blocks.len().max(1)
    } else {
        per_row
    };

    let mut rows: Vec<String> = blocks
        .chunks(chunk)
        .map(|row| {
            row.iter()
                .map(SerializedBlock::as_str)
                .collect::<Vec<_>>()
                .join(&format!(" {} ", COLUMN_SEPARATOR))
        })
        .collect();
    if rows.is_empty() {
        rows.push(String::new());
    }

    let row_count = rows.len();
    let mut text = document_header(chunk);
    for (i, row) in rows.iter().enumerate() {
        text.push_str(row);
        if i + 1 < row_count {
            text.push(' ');
            text.push_str(LINE_BREAK);
        }
        text.push('\n');
    }
    text.push_str(&document_footer());

    Document {
        text,
        rows: row_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::problem::Operator;

    fn problem(operands: &[u32], op: Operator) -> Problem {
        Problem::new(operands.to_vec(), vec![op; operands.len() - 1]).unwrap()
    }

    #[test]
    fn test_serialize_two_operands() {
        let block = serialize(&problem(&[452, 37], Operator::Minus));
        assert_eq!(
            block.as_str(),
            "$ \\begin{array}{r}\n 452  \\\\\n -37  \\\\\n \\hline \n\\end{array} $"
        );
    }

    #[test]
    fn test_serialize_four_operands() {
        let block = serialize(&problem(&[12, 5, 77, 9], Operator::Plus));
        let text = block.as_str();
        assert!(text.contains(" 12  \\\\\n 5  \\\\\n 77  \\\\\n +9  \\\\\n"));
        assert_eq!(text.matches(RULE_MARKER).count(), 1);
        assert_eq!(text.matches('+').count(), 1);
    }

    #[test]
    fn test_array_environment_strips_delimiters() {
        let block = serialize(&problem(&[10, 1], Operator::Plus));
        let env = block.array_environment();
        assert!(env.starts_with("\\begin{array}{r}"));
        assert!(env.ends_with("\\end{array}"));
    }

    #[test]
    fn test_assemble_rows() {
        let blocks: Vec<_> = (0..12)
            .map(|i| serialize(&problem(&[100 + i, 1], Operator::Plus)))
            .collect();
        let doc = assemble(&blocks, 5);

        assert_eq!(doc.rows(), 3);
        assert!(doc.as_str().contains("\\begin{tabular}{*{5}{c}}\n"));
        assert_eq!(doc.as_str().matches(" & ").count(), 4 + 4 + 1);
        assert!(doc.as_str().ends_with("\\end{tabular}\n\n\\end{document}"));
    }

    #[test]
    fn test_assemble_partial_row_not_padded() {
        let blocks: Vec<_> = (0..3)
            .map(|i| serialize(&problem(&[100 + i, 1], Operator::Plus)))
            .collect();
        let doc = assemble(&blocks, 5);

        assert_eq!(doc.rows(), 1);
        assert_eq!(doc.as_str().matches(" & ").count(), 2);
        assert_eq!(doc.as_str().matches("\\begin{array}").count(), 3);
    }

    #[test]
    fn test_assemble_empty_keeps_wrapper() {
        let doc = assemble(&[], 5);
        assert_eq!(doc.rows(), 1);
        assert!(doc.as_str().contains("\\begin{tabular}{*{5}{c}}\n\n\\end{tabular}"));
    }

    #[test]
    fn test_assemble_zero_per_row_single_row() {
        let blocks: Vec<_> = (0..4)
            .map(|i| serialize(&problem(&[100 + i, 1], Operator::Plus)))
            .collect();
        let doc = assemble(&blocks, 0);
        assert_eq!(doc.rows(), 1);
        assert_eq!(doc.as_str().matches(" & ").count(), 3);
    }
}
