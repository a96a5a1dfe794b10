//! Abstract and keyword section markers.

use regex::Match;

use crate::patterns::{ABSTRACT_MARKER, KEYWORD_PREFIX};

const ABSTRACT_WORD_LEN: usize = "abstract".len();

/// The first "abstract" marker, if the word ends within the first `window` chars.
fn abstract_marker(text: &str, window: usize) -> Option<Match<'_>> {
    ABSTRACT_MARKER
        .find(text)
        .filter(|m| text[..m.start()].chars().count() + ABSTRACT_WORD_LEN <= window)
}

/// Whether the line opens the abstract: "abstract" within the first `window` chars.
///
/// Restricting the search to the start of the line keeps sentences that merely
/// mention an abstract from opening the section.
#[must_use]
pub fn is_abstract_start(text: &str, window: usize) -> bool {
    abstract_marker(text, window).is_some()
}

/// Remove the "Abstract" heading, anything before it and its separators.
///
/// Numbered headings such as `1 ABSTRACT:` or `I. ABSTRACT` lose their number
/// too. Lines without a marker in the window come back trimmed.
#[must_use]
pub fn strip_abstract_marker(text: &str, window: usize) -> String {
    match abstract_marker(text, window) {
        Some(m) => text[m.end()..].trim().to_string(),
        None => text.trim().to_string(),
    }
}

/// Whether the line carries a "keyword(s)" or "index terms" marker anywhere.
#[must_use]
pub fn has_keyword_marker(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("keyword") || lower.contains("index terms")
}

/// Remove the leading "Keywords" / "Index Terms" heading and its separators.
#[must_use]
pub fn strip_keyword_marker(text: &str) -> String {
    KEYWORD_PREFIX.replace(text, "").trim().to_string()
}

/// Trim a keyword token: whitespace and colons on both ends, one trailing period.
fn clean_keyword(token: &str) -> &str {
    let token = token.trim_matches(|c: char| c.is_whitespace() || c == ':');
    token.strip_suffix('.').unwrap_or(token).trim()
}

/// Split a comma-separated keyword list, preserving source order.
#[must_use]
pub fn split_keywords(text: &str) -> Vec<String> {
    text.split(',')
        .map(clean_keyword)
        .filter(|k| !k.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Keywords of an inline marker line such as `Keywords: a, b, c.`
#[must_use]
pub fn inline_keywords(text: &str) -> Vec<String> {
    split_keywords(&strip_keyword_marker(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abstract_start_window() {
        assert!(is_abstract_start("Abstract. This paper", 20));
        assert!(is_abstract_start("1 ABSTRACT", 20));
        assert!(!is_abstract_start("In this work we summarize the abstract idea", 20));
        assert!(!is_abstract_start("Abstract", 3));
    }

    #[test]
    fn test_strip_abstract_marker() {
        assert_eq!(strip_abstract_marker("Abstract. This paper presents X.", 20), "This paper presents X.");
        assert_eq!(strip_abstract_marker("Abstract", 20), "");
        assert_eq!(strip_abstract_marker("ABSTRACT - We study", 20), "We study");
    }

    #[test]
    fn test_strip_numbered_abstract_heading() {
        assert_eq!(strip_abstract_marker("1 ABSTRACT We study graphs.", 20), "We study graphs.");
        assert_eq!(strip_abstract_marker("I. ABSTRACT", 20), "");
        assert_eq!(strip_abstract_marker("(extended abstract) More.", 20), "More.");
    }

    #[test]
    fn test_strip_ignores_marker_outside_window() {
        let line = "In this work we summarize the abstract idea";
        assert_eq!(strip_abstract_marker(line, 20), line);
    }

    #[test]
    fn test_keyword_marker_detection() {
        assert!(has_keyword_marker("Keywords deep learning"));
        assert!(has_keyword_marker("INDEX TERMS- graphs"));
        assert!(!has_keyword_marker("Index of terms"));
    }

    #[test]
    fn test_inline_keywords_preserve_order() {
        assert_eq!(
            inline_keywords("Keywords deep learning, vision, X."),
            vec!["deep learning", "vision", "X"]
        );
        assert_eq!(
            inline_keywords("Index Terms- zeta, alpha, zeta"),
            vec!["zeta", "alpha", "zeta"]
        );
    }

    #[test]
    fn test_split_keywords_drops_empty_tokens() {
        assert_eq!(split_keywords(" a ,, b:, ."), vec!["a", "b"]);
        assert!(split_keywords("").is_empty());
    }
}
