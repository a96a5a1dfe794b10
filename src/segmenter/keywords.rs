//! Keyword block look-ahead.
//!
//! When the layout model tags a "Keywords" / "Index Terms" heading as a title,
//! the keyword list itself usually sits in the following plain line(s). The
//! look-ahead scans forward from the heading and reports how many lines it
//! consumed, so the segmenter's main loop can skip them in one step.

use crate::extractor::markers::{split_keywords, strip_keyword_marker};
use crate::normalize::normalize;
use crate::transcript::TaggedLine;

/// Collect the keyword list that follows a TITLE-tagged keyword heading.
///
/// `lines[0]` is the heading. Text after the marker on the heading itself seeds
/// the buffer. Unless the seed already contains a period, following lines are
/// absorbed until:
///
/// - a TITLE line (not consumed),
/// - more than `slack` plain lines (the extra line is not consumed), or
/// - a line containing a period (consumed).
///
/// The buffer is cut at its first period and split on commas.
///
/// Returns the keywords and the number of lines consumed, heading included.
#[must_use]
pub fn scan_keyword_block(lines: &[TaggedLine], slack: usize) -> (Vec<String>, usize) {
    let Some(heading) = lines.first() else {
        return (Vec::new(), 0);
    };

    let mut buffer = Vec::new();
    let mut consumed = 1;

    let seed = strip_keyword_marker(&normalize(&heading.text));
    let seed_complete = seed.contains('.');
    if !seed.is_empty() {
        buffer.push(seed);
    }

    if !seed_complete {
        let mut plain_seen = 0;
        for line in &lines[1..] {
            if line.is_title() {
                break;
            }
            plain_seen += 1;
            if plain_seen > slack {
                break;
            }

            let text = normalize(&line.text);
            consumed += 1;
            let has_period = text.contains('.');
            buffer.push(text);
            if has_period {
                break;
            }
        }
    }

    let joined = buffer.join(" ");
    let head = joined.split('.').next().unwrap_or_default();
    (split_keywords(head), consumed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_on_next_plain_line() {
        let lines = vec![
            TaggedLine::title("Keywords"),
            TaggedLine::plain("deep learning, vision, X."),
            TaggedLine::plain("1 Introduction"),
        ];
        let (keywords, consumed) = scan_keyword_block(&lines, 1);
        assert_eq!(keywords, vec!["deep learning", "vision", "X"]);
        assert_eq!(consumed, 2);
    }

    #[test]
    fn test_stops_before_title() {
        let lines = vec![
            TaggedLine::title("Index Terms"),
            TaggedLine::plain("graphs, trees"),
            TaggedLine::title("I. INTRODUCTION"),
        ];
        let (keywords, consumed) = scan_keyword_block(&lines, 1);
        assert_eq!(keywords, vec!["graphs", "trees"]);
        assert_eq!(consumed, 2);
    }

    #[test]
    fn test_one_line_of_slack() {
        let lines = vec![
            TaggedLine::title("Keywords"),
            TaggedLine::plain("alpha, beta"),
            TaggedLine::plain("Body text that is not a keyword list"),
        ];
        let (keywords, consumed) = scan_keyword_block(&lines, 1);
        assert_eq!(keywords, vec!["alpha", "beta"]);
        assert_eq!(consumed, 2);
    }

    #[test]
    fn test_wider_slack_absorbs_wrapped_list() {
        let lines = vec![
            TaggedLine::title("Keywords"),
            TaggedLine::plain("alpha, beta,"),
            TaggedLine::plain("gamma. We then"),
        ];
        let (keywords, consumed) = scan_keyword_block(&lines, 2);
        assert_eq!(keywords, vec!["alpha", "beta", "gamma"]);
        assert_eq!(consumed, 3);
    }

    #[test]
    fn test_seed_on_heading_line() {
        let lines = vec![
            TaggedLine::title("Keywords: alpha, beta."),
            TaggedLine::plain("Unrelated text, here."),
        ];
        let (keywords, consumed) = scan_keyword_block(&lines, 1);
        assert_eq!(keywords, vec!["alpha", "beta"]);
        assert_eq!(consumed, 1);
    }

    #[test]
    fn test_heading_at_end_of_transcript() {
        let (keywords, consumed) = scan_keyword_block(&[TaggedLine::title("Keywords")], 1);
        assert!(keywords.is_empty());
        assert_eq!(consumed, 1);
    }
}
