//! Email address extraction.
//!
//! Runs on the raw line: normalization inserts a space after every `.` glued to
//! a letter, which would split `mit.edu` into `mit. edu`.

use indexmap::IndexSet;

use crate::patterns::{EMAIL, GROUPED_EMAIL};

/// Expand `{a, b}@domain` shorthand into `a@domain, b@domain`.
#[must_use]
pub fn expand_grouped_addresses(text: &str) -> String {
    let expanded = GROUPED_EMAIL.replace_all(text, |caps: &regex::Captures<'_>| {
        let domain = &caps[2];
        caps[1]
            .split(',')
            .map(str::trim)
            .filter(|local| !local.is_empty())
            .map(|local| format!("{local}@{domain}"))
            .collect::<Vec<_>>()
            .join(", ")
    });

    // Unbalanced OCR of the closing brace leaves "name }@domain".
    expanded.replace(" }@", "@").replace("} @", "@")
}

/// Extract email addresses from a line, deduplicated in first-seen order.
///
/// # Example
///
/// ```rust
/// use rs_papermeta::extractor::email::extract_emails;
///
/// let emails = extract_emails("{jane,john}@mit.edu");
/// assert_eq!(emails, vec!["jane@mit.edu", "john@mit.edu"]);
/// ```
#[must_use]
pub fn extract_emails(text: &str) -> Vec<String> {
    let expanded = expand_grouped_addresses(text);
    let found: IndexSet<String> = EMAIL
        .find_iter(&expanded)
        .map(|m| m.as_str().to_string())
        .collect();
    found.into_iter().collect()
}

/// Remove every email address (including grouped shorthand) from a line.
#[must_use]
pub fn strip_emails(text: &str) -> String {
    let expanded = expand_grouped_addresses(text);
    EMAIL.replace_all(&expanded, " ").into_owned()
}
