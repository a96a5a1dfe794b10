//! Affiliation extraction.
//!
//! Two stages plus a fallback:
//!
//! 1. Loose regex candidates around institution words (University, Institute, ...)
//! 2. Each candidate goes through the entity classifier; spans labelled as
//!    organizations are re-validated with the word-bounded regex
//! 3. The word-bounded regex also runs over the whole line and is unioned in,
//!    catching organizations the classifier misses
//!
//! When the classifier fails or none is attached, stage 2 contributes nothing
//! and the result is the regex-only fallback.

use indexmap::IndexSet;
use log::warn;

use crate::classifier::{spans_of_kind, EntityClassifier, EntityKind};
use crate::patterns::{AFFILIATION, AFFILIATION_CANDIDATE};

/// Trim the first institution phrase out of `text`, if any.
#[must_use]
pub fn validate_affiliation(text: &str) -> Option<String> {
    AFFILIATION
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extract affiliation strings from a normalized line.
#[must_use]
pub fn extract_affiliations(text: &str, classifier: &dyn EntityClassifier) -> Vec<String> {
    let mut affiliations = IndexSet::new();

    if classifier.is_available() {
        for candidate in AFFILIATION_CANDIDATE.find_iter(text) {
            let candidate = candidate.as_str().trim();
            match spans_of_kind(classifier, candidate, &EntityKind::Organization) {
                Ok(orgs) => {
                    affiliations.extend(orgs.iter().filter_map(|org| validate_affiliation(org)));
                }
                Err(err) => {
                    warn!("affiliation classifier failed, keeping regex candidates only: {err}");
                    break;
                }
            }
        }
    }

    for caps in AFFILIATION.captures_iter(text) {
        if let Some(m) = caps.get(1) {
            let direct = m.as_str().trim();
            if !direct.is_empty() {
                affiliations.insert(direct.to_string());
            }
        }
    }

    affiliations.into_iter().collect()
}
