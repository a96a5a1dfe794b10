//! Configuration options for metadata parsing.
//!
//! The `Options` struct controls the segmentation heuristics, allowing users to
//! pick an author extraction strategy and tune the thresholds the segmenter
//! relies on.

use std::fmt;
use std::str::FromStr;

/// How person names are pulled out of metadata lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthorStrategy {
    /// Split on separators and keep capitalized, digit-free segments that
    /// contain no institutional vocabulary.
    #[default]
    Heuristic,

    /// Keep spans the entity classifier labels as persons. Falls back to the
    /// heuristic for a line when the classifier is unavailable.
    NerEntity,

    /// Run both and keep the union (heuristic results first).
    Union,
}

impl FromStr for AuthorStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heuristic" => Ok(Self::Heuristic),
            "ner" | "ner-entity" | "nerentity" => Ok(Self::NerEntity),
            "union" => Ok(Self::Union),
            other => Err(format!("unknown author strategy: {other}")),
        }
    }
}

impl fmt::Display for AuthorStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Heuristic => "heuristic",
            Self::NerEntity => "ner",
            Self::Union => "union",
        };
        f.write_str(name)
    }
}

/// Configuration options for metadata parsing.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_papermeta::{AuthorStrategy, Options};
///
/// let options = Options {
///     author_strategy: AuthorStrategy::Union,
///     abstract_ends_at_period: false,
///     ..Options::default()
/// };
/// assert!(!options.collect_sections);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Strategy used to extract author names.
    ///
    /// Default: `AuthorStrategy::Heuristic`
    pub author_strategy: AuthorStrategy,

    /// End the abstract as soon as an appended line ends with a period.
    ///
    /// Assumes short abstracts are segmented one sentence per OCR line. Lines
    /// that end in an abbreviation ("et al.") or a decimal truncate the
    /// abstract early; disable to keep reading until a keyword marker or a
    /// new title line.
    ///
    /// Default: `true`
    pub abstract_ends_at_period: bool,

    /// Number of leading characters searched for the word "abstract".
    ///
    /// Default: `20`
    pub abstract_marker_window: usize,

    /// Minimum author name length (characters).
    ///
    /// Default: `2`
    pub min_author_len: usize,

    /// Maximum author name length (characters).
    ///
    /// Default: `40`
    pub max_author_len: usize,

    /// Plain lines the keyword look-ahead may absorb after a keyword heading.
    ///
    /// Default: `1`
    pub keyword_lookahead_slack: usize,

    /// Collect titled body sections after the abstract.
    ///
    /// Default: `false`
    pub collect_sections: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            author_strategy: AuthorStrategy::Heuristic,
            abstract_ends_at_period: true,
            abstract_marker_window: 20,
            min_author_len: 2,
            max_author_len: 40,
            keyword_lookahead_slack: 1,
            collect_sections: false,
        }
    }
}
