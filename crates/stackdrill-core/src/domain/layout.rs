//! Block layout parsing
//!
//! Turns one raw array block back into typed lines and computes the
//! column widths needed to print it right-aligned in a fixed-width font.

use crate::constants::{
    ARRAY_ENV, COLUMN_SEPARATOR, LINE_BREAK, MIN_RULE_WIDTH, OPERATOR_COLUMN_WIDTH, RULE_CHAR,
    RULE_MARKER,
};
use crate::domain::problem::Operator;

/// One parsed line of a block
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedLine {
    Number {
        operator: Option<Operator>,
        digits: String,
    },
    Rule,
}

/// Column widths of a block
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutSpec {
    /// Longest digit string
    pub number_width: usize,
    /// 2 when any line carries a sign, else 0
    pub operator_column_width: usize,
    /// `max(number_width + operator_column_width, 5)`
    pub rule_width: usize,
}

impl LayoutSpec {
    pub fn has_operator_column(&self) -> bool {
        self.operator_column_width > 0
    }
}

/// A parsed block: typed lines plus their widths
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedBlock {
    pub lines: Vec<ParsedLine>,
    pub layout: LayoutSpec,
}

impl ParsedBlock {
    /// Number of `Number` lines
    pub fn number_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line, ParsedLine::Number { .. }))
            .count()
    }

    pub fn rule_count(&self) -> usize {
        self.lines.len() - self.number_count()
    }

    /// Fixed-width display lines
    pub fn display_lines(&self) -> Vec<String> {
        render_lines(&self.lines, &self.layout)
    }
}

/// Remove `\begin{array}{cols}` and `\end{array}`
fn strip_array_wrapper(raw: &str) -> String {
    let begin = format!("\\begin{{{}}}", ARRAY_ENV);
    let end = format!("\\end{{{}}}", ARRAY_ENV);

    let mut body = raw.trim();
    if let Some(rest) = body.strip_prefix(&begin) {
        body = rest.trim_start();
        if body.starts_with('{')
            && let Some(close) = body.find('}')
        {
            body = &body[close + 1..];
        }
    }
    let body = body.trim_end();
    let body = body.strip_suffix(&end).unwrap_or(body);

    body.replace(COLUMN_SEPARATOR, "")
}

fn parse_line(line: &str) -> ParsedLine {
    if line.contains(RULE_MARKER) {
        return ParsedLine::Rule;
    }

    let mut chars = line.chars();
    match chars.next().and_then(Operator::from_char) {
        Some(op) => ParsedLine::Number {
            operator: Some(op),
            digits: chars.as_str().trim().to_string(),
        },
        None => ParsedLine::Number {
            operator: None,
            digits: line.to_string(),
        },
    }
}

/// Compute widths for a set of lines
pub fn compute_layout(lines: &[ParsedLine]) -> LayoutSpec {
    let mut number_width = 0;
    let mut has_operator_column = false;

    for line in lines {
        if let ParsedLine::Number { operator, digits } = line {
            number_width = number_width.max(digits.chars().count());
            has_operator_column |= operator.is_some();
        }
    }

    let operator_column_width = if has_operator_column {
        OPERATOR_COLUMN_WIDTH
    } else {
        0
    };

    LayoutSpec {
        number_width,
        operator_column_width,
        rule_width: (number_width + operator_column_width).max(MIN_RULE_WIDTH),
    }
}

/// Parse one raw array block
///
/// Never fails: a block without number lines gets `number_width == 0` and
/// the minimum rule width.
pub fn parse_block(raw: &str) -> ParsedBlock {
    let body = strip_array_wrapper(raw);
    let lines: Vec<ParsedLine> = body
        .split(LINE_BREAK)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect();

    let layout = compute_layout(&lines);
    ParsedBlock { lines, layout }
}

/// Render lines at fixed width
///
/// Numbers are right-justified to `number_width` and, when the block has
/// an operator column, prefixed by `"<sign> "` or two spaces. Rules become
/// `rule_width` dashes.
pub fn render_lines(lines: &[ParsedLine], layout: &LayoutSpec) -> Vec<String> {
    lines
        .iter()
        .map(|line| match line {
            ParsedLine::Rule => RULE_CHAR.to_string().repeat(layout.rule_width),
            ParsedLine::Number { operator, digits } => {
                let prefix = match (layout.has_operator_column(), operator) {
                    (false, _) => String::new(),
                    (true, Some(op)) => format!("{} ", op.as_char()),
                    (true, None) => " ".repeat(OPERATOR_COLUMN_WIDTH),
                };
                format!("{}{:>width$}", prefix, digits, width = layout.number_width)
            }
        })
        .collect()
}
