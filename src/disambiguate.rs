//! Author/affiliation disambiguation.
//!
//! Author and affiliation detection both key off capitalized multi-word phrases
//! and frequently fire on the same line, so an affiliation candidate such as
//! `Jane Doe, MIT Institute of Technology` must lose the author names before it
//! is stored.
//!
//! The check runs against the authors known *when the candidate is seen*: every
//! author from earlier lines plus those extracted from the current line. An
//! author first discovered on a later line does not clean affiliations that were
//! already stored.

use indexmap::IndexSet;

use crate::patterns::WHITESPACE_NORMALIZE;

/// Characters trimmed from the ends of a cleaned affiliation.
const EDGE_DEBRIS: &[char] = &[' ', ',', '.', '-', '\n'];

/// Tidy what remains after author names were cut out of a candidate.
fn tidy_remainder(remainder: &str) -> String {
    let collapsed = WHITESPACE_NORMALIZE.replace_all(remainder, " ");
    let joined = collapsed
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty() && !part.chars().all(|c| EDGE_DEBRIS.contains(&c)))
        .collect::<Vec<_>>()
        .join(", ");
    joined.trim_matches(EDGE_DEBRIS).to_string()
}

/// Resolve one affiliation candidate against the currently known authors.
///
/// Returns the candidate unchanged (trimmed) when it contains no author name,
/// the candidate with every author name removed when it does, or `None` when
/// nothing is left after the removal.
///
/// # Example
///
/// ```rust
/// use indexmap::IndexSet;
/// use rs_papermeta::disambiguate::disambiguate;
///
/// let authors: IndexSet<String> = ["Jane Doe".to_string()].into_iter().collect();
/// assert_eq!(
///     disambiguate(&authors, "Jane Doe, Stanford University"),
///     Some("Stanford University".to_string())
/// );
/// ```
#[must_use]
pub fn disambiguate(authors: &IndexSet<String>, candidate: &str) -> Option<String> {
    let candidate = candidate.trim();
    let contains_author = |text: &str| authors.iter().any(|a| !a.is_empty() && text.contains(a.as_str()));

    if !contains_author(candidate) {
        return (!candidate.is_empty()).then(|| candidate.to_string());
    }

    // Removal can splice two fragments into a new occurrence, so repeat until
    // no known author is left. Every pass strictly shortens the text.
    let mut remainder = candidate.to_string();
    while contains_author(&remainder) {
        for author in authors.iter().filter(|a| !a.is_empty()) {
            if remainder.contains(author.as_str()) {
                remainder = remainder.replace(author.as_str(), "");
            }
        }
    }

    let cleaned = tidy_remainder(&remainder);
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Disambiguate `candidate` and, when something is left, add it to `affiliations`.
pub fn add_affiliation(authors: &IndexSet<String>, affiliations: &mut IndexSet<String>, candidate: &str) {
    if let Some(affiliation) = disambiguate(authors, candidate) {
        affiliations.insert(affiliation);
    }
}
