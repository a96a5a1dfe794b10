//! Author name extraction.
//!
//! Two interchangeable strategies, selected with `Options::author_strategy`:
//!
//! - **Heuristic**: split the line on `,` / ` and ` / `&` and keep segments that
//!   look like names (length window, no digits, no institutional vocabulary,
//!   at least one capitalized token)
//! - **NerEntity**: keep spans the classifier labels as persons
//!
//! `Union` runs both. The NER strategy degrades to the heuristic for a line
//! when the classifier fails, and for every line when none is attached.

use indexmap::IndexSet;
use log::warn;

use crate::classifier::{spans_of_kind, EntityClassifier, EntityKind};
use crate::options::{AuthorStrategy, Options};
use crate::patterns::{AUTHOR_SEPARATOR, PARENTHESIZED};

/// Segments containing any of these (case-insensitive) are not person names.
const NON_PERSON_KEYWORDS: &[&str] = &[
    "university",
    "institute",
    "college",
    "research",
    "center",
    "centre",
    "laboratory",
    "school",
    "department",
    "engineering",
    "science",
    "abstract",
    "introduction",
    "keywords",
    "email",
    "http",
    "www",
    "@",
    "member",
    "fellow",
    "ieee",
    "acm",
];

/// Check whether a trimmed segment passes the name filters.
fn looks_like_name(segment: &str, options: &Options) -> bool {
    let len = segment.chars().count();
    if len < options.min_author_len || len > options.max_author_len {
        return false;
    }

    if segment.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }

    let lower = segment.to_lowercase();
    if NON_PERSON_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return false;
    }

    segment
        .split_whitespace()
        .any(|word| word.chars().next().is_some_and(char::is_uppercase))
}

/// Heuristic author candidates from a normalized line.
///
/// Footnote marks (`*`, `†`, `‡`) are already gone after normalization.
#[must_use]
pub fn heuristic_authors(text: &str, options: &Options) -> Vec<String> {
    let without_groups = PARENTHESIZED.replace_all(text, " ");

    AUTHOR_SEPARATOR
        .split(&without_groups)
        .map(str::trim)
        .filter(|part| looks_like_name(part, options))
        .map(ToString::to_string)
        .collect()
}

/// Person spans from the classifier, trimmed of trailing punctuation.
pub fn ner_authors(text: &str, classifier: &dyn EntityClassifier) -> crate::Result<Vec<String>> {
    let persons = spans_of_kind(classifier, text, &EntityKind::Person)?;
    Ok(persons
        .iter()
        .map(|name| {
            name.trim()
                .trim_end_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace())
                .trim_start_matches(',')
                .trim()
                .to_string()
        })
        .filter(|name| !name.is_empty())
        .collect())
}

/// Extract author candidates from a normalized line using the configured strategy.
#[must_use]
pub fn extract_authors(text: &str, options: &Options, classifier: &dyn EntityClassifier) -> Vec<String> {
    let mut authors: IndexSet<String> = IndexSet::new();

    let strategy = if classifier.is_available() {
        options.author_strategy
    } else {
        AuthorStrategy::Heuristic
    };

    match strategy {
        AuthorStrategy::Heuristic => authors.extend(heuristic_authors(text, options)),
        AuthorStrategy::NerEntity => match ner_authors(text, classifier) {
            Ok(found) => authors.extend(found),
            Err(err) => {
                warn!("person classifier failed, using heuristic authors: {err}");
                authors.extend(heuristic_authors(text, options));
            }
        },
        AuthorStrategy::Union => {
            authors.extend(heuristic_authors(text, options));
            match ner_authors(text, classifier) {
                Ok(found) => authors.extend(found),
                Err(err) => warn!("person classifier failed, keeping heuristic authors: {err}"),
            }
        }
    }

    authors.into_iter().collect()
}
