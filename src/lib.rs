//! # rs-papermeta
//!
//! Bibliographic metadata extraction from tagged OCR transcripts of research
//! papers.
//!
//! An upstream layout model labels each region of a paper's first page as a
//! title or plain text. This library walks those lines once and assembles a
//! structured record: title, authors, emails, affiliations, keywords and the
//! abstract.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_papermeta::parse;
//!
//! let transcript = "\
//! [TITLE] Deep Learning for X
//! [PLAIN_TEXT] Jane Doe, John Smith, MIT Institute of Technology
//! [PLAIN_TEXT] jane@mit.edu
//! [PLAIN_TEXT] Abstract
//! [PLAIN_TEXT] This paper presents X.";
//!
//! let record = parse(transcript);
//! assert_eq!(record.title, "Deep Learning for X");
//! assert_eq!(record.metadata.authors, vec!["Jane Doe", "John Smith"]);
//! assert_eq!(record.metadata.emails, vec!["jane@mit.edu"]);
//! assert_eq!(record.abstract_text, "This paper presents X.");
//! ```
//!
//! ## Features
//!
//! - **Segmentation**: title, metadata block, abstract, keywords, body sections
//! - **Normalization**: Unicode NFKC plus OCR punctuation cleanup
//! - **Entity extraction**: regex heuristics, optionally confirmed by a
//!   pluggable `EntityClassifier`
//! - **Robust**: missing input or a failing classifier degrades to empty or
//!   heuristic results instead of errors

mod error;
mod options;
mod patterns;
mod result;

/// Pluggable named-entity classifier seam.
pub mod classifier;

/// Affiliation cleanup against known author names.
pub mod disambiguate;

/// Transcript byte decoding.
pub mod encoding;

/// Per-line extractors (emails, authors, affiliations, section markers).
pub mod extractor;

/// Trailing-fragment trimming for collected text blocks.
pub mod finalize;

/// Text normalization for OCR output.
pub mod normalize;

/// Section segmentation state machine.
pub mod segmenter;

/// Tagged transcript loading.
pub mod transcript;

use std::path::Path;

use log::warn;

// Public API - re-exports
pub use classifier::{EntityClassifier, EntityKind, EntitySpan, NoClassifier};
pub use error::{Error, Result};
pub use options::{AuthorStrategy, Options};
pub use result::{PaperMetadata, PaperRecord, Section};
pub use transcript::{load_tagged_lines, LineTag, TaggedLine};

use segmenter::Segmenter;

/// Parses a tagged transcript using default options and no classifier.
///
/// Never fails: input without a TITLE line yields an empty record.
#[must_use]
pub fn parse(transcript: &str) -> PaperRecord {
    parse_with_options(transcript, &Options::default())
}

/// Parses a tagged transcript with custom options and no classifier.
///
/// # Example
///
/// ```rust
/// use rs_papermeta::{parse_with_options, Options};
///
/// let options = Options {
///     collect_sections: true,
///     ..Options::default()
/// };
/// let record = parse_with_options("[TITLE] Paper\n[PLAIN_TEXT] Abstract", &options);
/// assert_eq!(record.title, "Paper");
/// ```
#[must_use]
pub fn parse_with_options(transcript: &str, options: &Options) -> PaperRecord {
    parse_with_classifier(transcript, options, &NoClassifier)
}

/// Parses a tagged transcript, confirming entities with `classifier`.
///
/// Classifier failures are logged and the affected line falls back to the
/// regex heuristics.
#[must_use]
pub fn parse_with_classifier(
    transcript: &str,
    options: &Options,
    classifier: &dyn EntityClassifier,
) -> PaperRecord {
    let lines = load_tagged_lines(transcript);
    parse_lines(&lines, options, classifier)
}

/// Runs the segmenter over already loaded lines.
#[must_use]
pub fn parse_lines(
    lines: &[TaggedLine],
    options: &Options,
    classifier: &dyn EntityClassifier,
) -> PaperRecord {
    Segmenter::new(options, classifier).run(lines)
}

/// Parses transcript bytes with BOM-based encoding detection.
///
/// Invalid sequences are replaced with U+FFFD rather than causing errors.
///
/// # Example
///
/// ```rust
/// use rs_papermeta::parse_bytes;
///
/// let record = parse_bytes(b"\xEF\xBB\xBF[TITLE] Caf\xC3\xA9 Physics");
/// assert_eq!(record.title, "Café Physics");
/// ```
#[must_use]
pub fn parse_bytes(bytes: &[u8]) -> PaperRecord {
    parse_bytes_with_options(bytes, &Options::default())
}

/// Parses transcript bytes with custom options.
#[must_use]
pub fn parse_bytes_with_options(bytes: &[u8], options: &Options) -> PaperRecord {
    let transcript = encoding::decode_transcript(bytes);
    parse_with_options(&transcript, options)
}

/// Reads and parses a transcript file.
///
/// # Errors
///
/// Returns `Error::InputMissing` if `path` does not exist and `Error::Io` if it
/// cannot be read.
pub fn try_parse_file(
    path: impl AsRef<Path>,
    options: &Options,
    classifier: &dyn EntityClassifier,
) -> Result<PaperRecord> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::InputMissing(path.to_path_buf()));
    }

    let bytes = std::fs::read(path)?;
    let transcript = encoding::decode_transcript(&bytes);
    Ok(parse_with_classifier(&transcript, options, classifier))
}

/// Reads and parses a transcript file, returning an empty record on failure.
///
/// # Example
///
/// ```rust
/// use rs_papermeta::{parse_file, Options};
///
/// let record = parse_file("/nonexistent/transcript.txt", &Options::default());
/// assert!(record.is_empty());
/// ```
#[must_use]
pub fn parse_file(path: impl AsRef<Path>, options: &Options) -> PaperRecord {
    let path = path.as_ref();
    match try_parse_file(path, options, &NoClassifier) {
        Ok(record) => record,
        Err(err) => {
            warn!("{}: {err}", path.display());
            PaperRecord::default()
        }
    }
}
