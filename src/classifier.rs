//! Named-entity classification capability.
//!
//! The parser does not ship a model. It asks an `EntityClassifier` to label
//! spans of a line as persons or organizations and treats the answer as a hint:
//! an empty answer is valid, and a failing classifier only removes the
//! classifier-confirmed candidates for that call.

use crate::error::{Error, Result};

/// Entity label attached to a classified span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityKind {
    /// A person name.
    Person,
    /// An organization (university, lab, company, ...).
    Organization,
    /// Any other label the backend produces.
    Other(String),
}

/// A span of the input text with its entity label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    /// The span text as it appears in the input.
    pub text: String,
    /// The label assigned to the span.
    pub kind: EntityKind,
}

impl EntitySpan {
    /// Create a span.
    #[must_use]
    pub fn new(text: impl Into<String>, kind: EntityKind) -> Self {
        Self { text: text.into(), kind }
    }
}

/// A synchronous span classifier.
///
/// Implementations return `Error::ClassifierUnavailable` when the backend cannot
/// be reached; callers degrade to regex-only extraction for that line.
pub trait EntityClassifier {
    /// Classify spans of `text`.
    fn classify_spans(&self, text: &str) -> Result<Vec<EntitySpan>>;

    /// Whether a backend is attached at all.
    ///
    /// Extractors skip the classifier (without logging a failure) when this is
    /// `false` and use their regex fallbacks.
    fn is_available(&self) -> bool {
        true
    }
}

impl<F> EntityClassifier for F
where
    F: Fn(&str) -> Result<Vec<EntitySpan>>,
{
    fn classify_spans(&self, text: &str) -> Result<Vec<EntitySpan>> {
        self(text)
    }
}

/// Placeholder used when no NER backend is configured.
///
/// Reports itself unavailable, so person and organization detection fall back
/// to the regex heuristics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClassifier;

impl EntityClassifier for NoClassifier {
    fn classify_spans(&self, _text: &str) -> Result<Vec<EntitySpan>> {
        Err(Error::ClassifierUnavailable("no entity classifier configured".into()))
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// Texts of the spans carrying `kind`, or the classifier error.
pub(crate) fn spans_of_kind(
    classifier: &dyn EntityClassifier,
    text: &str,
    kind: &EntityKind,
) -> Result<Vec<String>> {
    Ok(classifier
        .classify_spans(text)?
        .into_iter()
        .filter(|span| &span.kind == kind)
        .map(|span| span.text)
        .collect())
}
