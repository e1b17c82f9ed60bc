//! Array block extraction
//!
//! Extraction narrows the text layer by layer:
//!
//! 1. interior of `\begin{document}...\end{document}`
//! 2. interior of `\begin{tabular}{cols}...\end{tabular}`
//! 3. every `$...$` span
//! 4. spans that consist entirely of one `\begin{array}...\end{array}`
//!
//! A missing layer passes the text through unchanged. Spans failing step 4
//! are dropped without error.

use crate::constants::{ARRAY_ENV, DOCUMENT_ENV, MATH_DELIMITER, TABLE_ENV};
use log::{debug, trace};

fn begin_tag(env: &str) -> String {
    format!("\\begin{{{}}}", env)
}

fn end_tag(env: &str) -> String {
    format!("\\end{{{}}}", env)
}

/// Length of a balanced `{...}` group at the start of `text`, if any
fn brace_group_len(text: &str) -> Option<usize> {
    if !text.starts_with('{') {
        return None;
    }

    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }

    None
}

/// Interior of the first `\begin{env}...\end{env}` span
///
/// With `skip_argument`, a brace group directly after the opening tag
/// (such as a column spec) is excluded from the interior.
pub fn environment_interior<'a>(text: &'a str, env: &str, skip_argument: bool) -> Option<&'a str> {
    let begin = begin_tag(env);
    let end = end_tag(env);

    let mut start = text.find(&begin)? + begin.len();
    if skip_argument {
        let rest = &text[start..];
        let leading_ws = rest.len() - rest.trim_start().len();
        if let Some(len) = brace_group_len(&rest[leading_ws..]) {
            start += leading_ws + len;
        }
    }

    let stop = start + text[start..].find(&end)?;
    Some(&text[start..stop])
}

/// Narrow to an environment's interior, or return the text unchanged
fn narrow<'a>(text: &'a str, env: &str, skip_argument: bool) -> &'a str {
    match environment_interior(text, env, skip_argument) {
        Some(interior) => interior,
        None => {
            trace!("No {} environment, using text as-is", env);
            text
        }
    }
}

/// All `$...$` spans, paired left to right
///
/// An unmatched trailing delimiter is ignored.
pub fn math_spans(text: &str) -> Vec<&str> {
    let segments: Vec<&str> = text.split(MATH_DELIMITER).collect();
    let closed = segments.len().saturating_sub(1);

    segments[..closed].iter().skip(1).step_by(2).copied().collect()
}

/// The span, trimmed, if it is exactly one array environment
pub fn array_block(span: &str) -> Option<&str> {
    let trimmed = span.trim();
    let begin = begin_tag(ARRAY_ENV);
    let end = end_tag(ARRAY_ENV);

    if trimmed.len() >= begin.len() + end.len()
        && trimmed.starts_with(&begin)
        && trimmed.ends_with(&end)
    {
        Some(trimmed)
    } else {
        None
    }
}

/// Extract raw array blocks from a document or a fragment
///
/// Returns blocks in document order. An empty result is not an error.
pub fn extract(text: &str) -> Vec<String> {
    let body = narrow(text, DOCUMENT_ENV, false);
    let table = narrow(body, TABLE_ENV, true).trim();

    let spans = math_spans(table);
    let blocks: Vec<String> = spans
        .iter()
        .filter_map(|span| {
            let block = array_block(span);
            if block.is_none() {
                trace!("Skipping math span without a full array: {:?}", span.trim());
            }
            block.map(str::to_string)
        })
        .collect();

    debug!(
        "Extracted {} array blocks from {} math spans",
        blocks.len(),
        spans.len()
    );
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_interior() {
        let text = "x \\begin{document}body\\end{document} y";
        assert_eq!(environment_interior(text, "document", false), Some("body"));
        assert_eq!(environment_interior("no env", "document", false), None);
        assert_eq!(
            environment_interior("\\begin{document} unterminated", "document", false),
            None
        );
    }

    #[test]
    fn test_environment_interior_skips_nested_argument() {
        let text = "\\begin{tabular}{*{5}{c}}\ncells\n\\end{tabular}";
        assert_eq!(environment_interior(text, "tabular", true), Some("\ncells\n"));
    }

    #[test]
    fn test_brace_group_len() {
        assert_eq!(brace_group_len("{r} rest"), Some(3));
        assert_eq!(brace_group_len("{*{5}{c}}x"), Some(9));
        assert_eq!(brace_group_len("{open"), None);
        assert_eq!(brace_group_len("r}"), None);
    }

    #[test]
    fn test_math_spans_pairs_delimiters() {
        assert_eq!(math_spans("a $b$ c $d$ e"), vec!["b", "d"]);
        assert_eq!(math_spans("$x$ $dangling"), vec!["x"]);
        assert!(math_spans("no math").is_empty());
        assert_eq!(math_spans("$multi\nline$"), vec!["multi\nline"]);
    }

    #[test]
    fn test_array_block_requires_full_span() {
        assert_eq!(
            array_block("  \\begin{array}{r} 1 \\end{array} "),
            Some("\\begin{array}{r} 1 \\end{array}")
        );
        assert_eq!(array_block("x = 1"), None);
        assert_eq!(array_block("\\begin{array}{r} 1 \\\\ \\hline"), None);
        assert_eq!(array_block("y \\begin{array}{r} 1 \\end{array}"), None);
    }

    #[test]
    fn test_extract_without_wrappers() {
        let text = "$ \\begin{array}{r} 5 \\\\ +3 \\\\ \\hline \\end{array} $";
        assert_eq!(
            extract(text),
            vec!["\\begin{array}{r} 5 \\\\ +3 \\\\ \\hline \\end{array}".to_string()]
        );
    }

    #[test]
    fn test_extract_ignores_math_outside_table() {
        let text = "\\begin{document}\n$\\begin{array}{r}1\\end{array}$\n\
                    \\begin{tabular}{cc}\n$\\begin{array}{r}2\\end{array}$\n\\end{tabular}\n\
                    \\end{document}";
        assert_eq!(extract(text), vec!["\\begin{array}{r}2\\end{array}".to_string()]);
    }

    #[test]
    fn test_extract_empty() {
        assert!(extract("").is_empty());
        assert!(extract("\\begin{document}\\end{document}").is_empty());
    }
}
