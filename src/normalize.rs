//! Text normalization applied to every transcript line before detection.
//!
//! OCR output mixes typographic variants of the same punctuation (curly quotes,
//! en/em dashes, bullets, stray symbols). Normalization folds them onto a small
//! ASCII set so the extractors only ever see one input shape:
//!
//! 1. Unicode NFKC normalization
//! 2. Typographic variant table (ordered, multi-character keys first)
//! 3. Space after `.`/`,` glued to a letter (`A.B` becomes `A. B`)
//! 4. Characters outside `\w`, whitespace and `. , @ - ( ) / &` become spaces
//! 5. Whitespace runs collapse to a single space
//!
//! The result is idempotent: normalizing normalized text is a no-op.

use unicode_normalization::UnicodeNormalization;

use crate::patterns::{GLUED_PUNCTUATION, NON_WHITELISTED, WHITESPACE_NORMALIZE};

/// Typographic variants and their canonical replacement.
///
/// Order matters: combinations such as `!”` must be folded before their
/// single-character parts.
const VARIANT_TABLE: &[(&str, &str)] = &[
    ("!\u{201D}", ","),
    ("!?", ","),
    ("?!", ","),
    ("\u{201D}", ","),
    ("\u{201C}", ","),
    ("\u{2019}", ","),
    ("\u{2018}", ","),
    ("\u{2014}", "-"),
    ("\u{2013}", "-"),
    ("\u{00B7}", ","),
    ("\u{2022}", ","),
    ("|", ","),
    ("{", "("),
    ("}", ")"),
    ("[", ")"),
    ("]", ")"),
    ("  ", " "),
    ("?", ","),
    ("'*\u{00B0}", ","),
    ("\u{00B0}*'", ","),
    ("\u{00B0}", ","),
    ("*!", ","),
    ("!", ","),
    ("\u{00AE}", ","),
];

/// Normalize a transcript line.
///
/// # Example
///
/// ```rust
/// use rs_papermeta::normalize::normalize;
///
/// assert_eq!(normalize("Dept.of CS \u{2014} MIT"), "Dept. of CS - MIT");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut result: String = text.nfkc().collect();

    for (variant, canonical) in VARIANT_TABLE {
        if result.contains(variant) {
            result = result.replace(variant, canonical);
        }
    }

    let result = GLUED_PUNCTUATION.replace_all(&result, "$1 $2");
    let result = NON_WHITELISTED.replace_all(&result, " ");
    let result = WHITESPACE_NORMALIZE.replace_all(&result, " ");

    result.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  Jane   Doe\t\tMIT \n"), "Jane Doe MIT");
    }

    #[test]
    fn test_maps_dashes_and_quotes() {
        assert_eq!(normalize("Index Terms\u{2014}graphs"), "Index Terms-graphs");
        assert_eq!(normalize("\u{201C}Deep\u{201D} nets"), ", Deep, nets");
    }

    #[test]
    fn test_maps_braces_to_parentheses() {
        assert_eq!(normalize("{jane,john}@mit.edu"), "(jane, john)@mit. edu");
    }

    #[test]
    fn test_inserts_space_after_glued_punctuation() {
        assert_eq!(normalize("A.B"), "A. B");
        assert_eq!(normalize("Paris,France"), "Paris, France");
        assert_eq!(normalize("3.14"), "3.14");
    }

    #[test]
    fn test_replaces_non_whitelisted_characters() {
        assert_eq!(normalize("Jane Doe*\u{2020}, John Smith\u{2021}"), "Jane Doe , John Smith");
        assert_eq!(normalize("R&D / Labs (Paris)"), "R&D / Labs (Paris)");
        assert_eq!(normalize("Keywords: a; b"), "Keywords a b");
    }

    #[test]
    fn test_nfkc_folds_ligatures() {
        assert_eq!(normalize("e\u{FB03}cient"), "efficient");
    }

    #[test]
    fn test_bullets_become_commas() {
        assert_eq!(normalize("Jane \u{2022} John"), "Jane , John");
    }

    #[test]
    fn test_idempotent_on_samples() {
        let samples = [
            "Jane Doe1*, John Smith2\u{2020}",
            "{a,b}@x.org | Univ.of Somewhere",
            "Abstract\u{2014}We study [1] things?! Really!",
            "\u{00AE} \u{00B0}*' text '*\u{00B0}",
            "",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }
}
