//! Blank-line passage splitting.
//!
//! A guideline document is a sequence of paragraphs separated by one or more
//! blank lines. Each paragraph, trimmed, becomes a [`Passage`].

use serde::Serialize;

/// A trimmed, non-empty paragraph of the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Passage {
    /// 0-based position in document order.
    pub ordinal: usize,
    /// Passage text with leading/trailing whitespace removed.
    pub text: String,
}

/// Split `text` on runs of blank lines, trimming each segment and discarding empty ones.
///
/// A line counts as blank when it holds nothing but whitespace, so `"a\n  \nb"`
/// yields two passages. Both `\n` and `\r\n` line endings are accepted.
pub fn split_passages(text: &str) -> Vec<String> {
    let mut passages = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            flush(&mut current, &mut passages);
        } else {
            current.push(line);
        }
    }
    flush(&mut current, &mut passages);
    passages
}

fn flush(lines: &mut Vec<&str>, out: &mut Vec<String>) {
    if lines.is_empty() {
        return;
    }
    let joined = lines.join("\n");
    let trimmed = joined.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
    lines.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_paragraphs() {
        let parts = split_passages(
            "Use diuretics for volume overload.\n\nConsider ACE inhibitors for chronic management.",
        );
        assert_eq!(
            parts,
            vec![
                "Use diuretics for volume overload.",
                "Consider ACE inhibitors for chronic management."
            ]
        );
    }

    #[test]
    fn test_multiple_blank_lines_and_whitespace() {
        let parts = split_passages("\n\n  first  \n\n\n\n   \n second\nstill second \n\n\t\n");
        assert_eq!(parts, vec!["first", "second\nstill second"]);
    }

    #[test]
    fn test_whitespace_only_lines_are_blank() {
        let parts = split_passages("alpha\n   \t\nbeta");
        assert_eq!(parts, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let parts = split_passages("alpha\r\n\r\nbeta\r\ngamma\r\n");
        assert_eq!(parts, vec!["alpha", "beta\ngamma"]);
    }

    #[test]
    fn test_empty_and_blank_documents() {
        assert!(split_passages("").is_empty());
        assert!(split_passages("   \n\n \t \n").is_empty());
    }

    #[test]
    fn test_single_paragraph_keeps_inner_newlines() {
        let parts = split_passages("line one\nline two");
        assert_eq!(parts, vec!["line one\nline two"]);
    }
}
