//! Tagged transcript loading.
//!
//! The upstream layout/OCR writer emits one region per line:
//!
//! ```text
//! ---------PAGE 1--------
//! [TITLE] Deep Learning for X
//! [PLAIN_TEXT] Jane Doe, John Smith, MIT Institute of Technology
//! Abstract
//! [IMAGE] ./data/extracted_figures/figure_2.png
//! ```
//!
//! `[TITLE]` and `[PLAIN_TEXT]` lines become `TaggedLine`s. Unmarked lines are
//! continuations and are kept as plain lines. Page separators and other
//! bracketed region markers (`[IMAGE]`, `[IMAGE CAPTION]`) carry no header text
//! and are skipped.

use log::trace;

use crate::error::{Error, Result};
use crate::patterns::{PAGE_SEPARATOR, REGION_MARKER};

const TITLE_MARKER: &str = "[TITLE]";
const PLAIN_TEXT_MARKER: &str = "[PLAIN_TEXT]";

/// Layout label of a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTag {
    /// A region the layout model labelled as a title or heading.
    Title,
    /// Body text, or an unmarked continuation line.
    PlainText,
}

/// One line of the transcript with its marker stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedLine {
    /// Layout label.
    pub tag: LineTag,
    /// Trimmed line text without the marker.
    pub text: String,
}

impl TaggedLine {
    /// A TITLE-tagged line.
    #[must_use]
    pub fn title(text: impl Into<String>) -> Self {
        Self { tag: LineTag::Title, text: text.into() }
    }

    /// A PLAIN_TEXT-tagged line.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self { tag: LineTag::PlainText, text: text.into() }
    }

    /// Whether the line is TITLE-tagged.
    #[must_use]
    pub fn is_title(&self) -> bool {
        self.tag == LineTag::Title
    }

    /// Parse a marked line. `line_no` is only used for the error.
    pub fn from_marked(line: &str, line_no: usize) -> Result<Self> {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix(TITLE_MARKER) {
            Ok(Self::title(rest.trim()))
        } else if let Some(rest) = line.strip_prefix(PLAIN_TEXT_MARKER) {
            Ok(Self::plain(rest.trim()))
        } else {
            Err(Error::MalformedLine { line: line_no, text: line.to_string() })
        }
    }
}

/// Whether a line is a non-text region (page separator, image, caption).
fn is_region_marker(line: &str) -> bool {
    PAGE_SEPARATOR.is_match(line) || REGION_MARKER.is_match(line)
}

/// Split a transcript into tagged lines, in document order.
///
/// Blank lines and non-text regions are skipped; unmarked lines are kept as
/// plain continuation lines.
#[must_use]
pub fn load_tagged_lines(transcript: &str) -> Vec<TaggedLine> {
    let mut lines = Vec::new();

    for (idx, raw) in transcript.lines().enumerate() {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }

        match TaggedLine::from_marked(raw, idx + 1) {
            Ok(line) => {
                if !line.text.is_empty() {
                    lines.push(line);
                }
            }
            Err(err) => {
                if is_region_marker(raw) {
                    trace!("skipping non-text region on line {}", idx + 1);
                    continue;
                }
                trace!("{err}; treating as continuation");
                lines.push(TaggedLine::plain(raw));
            }
        }
    }

    lines
}
