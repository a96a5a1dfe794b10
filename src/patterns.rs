//! Compiled regex patterns for transcript parsing.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.
//! Patterns are organized by the stage of the parser that uses them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Transcript Line Patterns
// =============================================================================

/// Matches page separators written between pages, e.g. `---------PAGE 1--------`.
pub static PAGE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-+\s*PAGE\s+\d+\s*-+$").expect("PAGE_SEPARATOR regex")
});

/// Matches any other bracketed region marker such as `[IMAGE]` or `[IMAGE CAPTION]`.
pub static REGION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[[A-Z][A-Z_ ]*\]").expect("REGION_MARKER regex")
});

// =============================================================================
// Normalization Patterns
// =============================================================================

/// Matches sentence punctuation glued to the following letter (`A.B`, `a,b`).
pub static GLUED_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([.,])([A-Za-z])").expect("GLUED_PUNCTUATION regex")
});

/// Matches every character outside the normalized alphabet.
pub static NON_WHITELISTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\w\s.,@\-()/&]").expect("NON_WHITELISTED regex")
});

/// Matches multiple whitespace characters for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

// =============================================================================
// Email Patterns
// =============================================================================

/// Matches grouped address shorthand: `{jane, john}@mit.edu`.
pub static GROUPED_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([^}]+)\}\s*@\s*([\w.\-]+\.\w+)").expect("GROUPED_EMAIL regex")
});

/// Matches a single email address.
pub static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}").expect("EMAIL regex")
});

// =============================================================================
// Affiliation Patterns
// =============================================================================

/// Loose organization phrase around an institution indicator word.
pub static AFFILIATION_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\p{Lu}[\p{L}&., '\-]*(?:Université|University|Institute|College|Hospital|Center|Centre|School|Laboratory|Labs|Research)[\p{L}&., '\-]*",
    )
    .expect("AFFILIATION_CANDIDATE regex")
});

/// Word-bounded organization phrase, used for validation and the direct pass.
pub static AFFILIATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(\p{Lu}[\p{L}&., '\-]*(?:Université|University|Institute|College|Hospital|Center|Centre|School|Laboratory|Labs|Research)[\p{L}&., '\-]*)\b",
    )
    .expect("AFFILIATION regex")
});

// =============================================================================
// Author Patterns
// =============================================================================

/// Separators between names in an author line.
pub static AUTHOR_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r",| and |&").expect("AUTHOR_SEPARATOR regex")
});

/// Parenthesized groups (footnote marks, grouped email prefixes after normalization).
pub static PARENTHESIZED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\([^)]*\)").expect("PARENTHESIZED regex")
});

// =============================================================================
// Section Marker Patterns
// =============================================================================

/// The word "abstract" plus the separators that follow it.
pub static ABSTRACT_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)abstract[.:\s\-)]*").expect("ABSTRACT_MARKER regex")
});

/// Leading "Keywords" / "Index Terms" heading plus the separators that follow it.
pub static KEYWORD_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[^\w]*?(?:keywords?|index\s+terms?)\b[.:\s\-]*").expect("KEYWORD_PREFIX regex")
});
