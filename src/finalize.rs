//! Content block finalization.
//!
//! OCR line splitting often leaves a partial sentence at the end of a block that
//! really belongs to the next page or section. Finalizing drops trailing lines
//! until the block ends on a complete sentence.

/// Closing quotes accepted after a sentence-final period.
const CLOSING_QUOTES: &[char] = &['"', '\'', '\u{201D}', '\u{2019}'];

/// Whether a line ends a sentence: `.` or `.` followed by a closing quote.
#[must_use]
pub fn ends_sentence(line: &str) -> bool {
    let line = line.trim_end();
    if line.ends_with('.') {
        return true;
    }
    line.strip_suffix(CLOSING_QUOTES)
        .is_some_and(|rest| rest.ends_with('.'))
}

/// Drop trailing lines that do not end a sentence, then join with single spaces.
///
/// # Example
///
/// ```rust
/// use rs_papermeta::finalize::finalize_block;
///
/// let lines = vec!["This is done.".to_string(), "This is not".to_string()];
/// assert_eq!(finalize_block(&lines), "This is done.");
/// ```
#[must_use]
pub fn finalize_block(lines: &[String]) -> String {
    let mut end = lines.len();
    while end > 0 && !ends_sentence(&lines[end - 1]) {
        end -= 1;
    }

    lines[..end]
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| (*l).to_string()).collect()
    }

    #[test]
    fn test_drops_incomplete_tail() {
        assert_eq!(finalize_block(&block(&["This is done.", "This is not"])), "This is done.");
    }

    #[test]
    fn test_drops_several_tail_lines() {
        assert_eq!(
            finalize_block(&block(&["First part", "ends here.", "Next page", "starts"])),
            "First part ends here."
        );
    }

    #[test]
    fn test_accepts_period_before_closing_quote() {
        assert_eq!(
            finalize_block(&block(&["He said \"stop.\"", "and then"])),
            "He said \"stop.\""
        );
        assert!(ends_sentence("the \u{201C}end.\u{201D}"));
    }

    #[test]
    fn test_all_incomplete_yields_empty() {
        assert_eq!(finalize_block(&block(&["no period", "still none"])), "");
        assert_eq!(finalize_block(&[]), "");
    }

    #[test]
    fn test_trailing_whitespace_is_ignored() {
        assert_eq!(finalize_block(&block(&["  Done.  ", "  "])), "Done.");
    }
}
