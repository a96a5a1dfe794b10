//! Result types for parsing output.
//!
//! `PaperRecord` serializes to the fixed upper-case JSON layout consumers
//! expect:
//!
//! ```json
//! {
//!   "TITLE": "...",
//!   "METADATA": { "AUTHORS": [], "EMAILS": [], "AFFILIATIONS": [], "KEYWORDS": [] },
//!   "ABSTRACT": "..."
//! }
//! ```
//!
//! Missing values are empty strings and empty lists, never absent fields.

use serde::{Deserialize, Serialize};

/// Bibliographic metadata found between the title and the abstract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct PaperMetadata {
    /// Author names, deduplicated.
    pub authors: Vec<String>,

    /// Email addresses, deduplicated.
    pub emails: Vec<String>,

    /// Affiliation strings, deduplicated. None contains an author name that
    /// was known when it was added.
    pub affiliations: Vec<String>,

    /// Keywords in source order. Duplicates are kept.
    pub keywords: Vec<String>,
}

/// A titled body section following the abstract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Section {
    /// Section heading text.
    pub heading: String,

    /// Section content, trimmed to complete sentences.
    pub content: String,
}

/// Structured record parsed from one paper's first page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// Paper title (first TITLE line), or empty.
    #[serde(rename = "TITLE")]
    pub title: String,

    /// Author/contact metadata.
    #[serde(rename = "METADATA")]
    pub metadata: PaperMetadata,

    /// Abstract text, or empty.
    #[serde(rename = "ABSTRACT")]
    pub abstract_text: String,

    /// Body sections (only with `Options::collect_sections`).
    #[serde(rename = "SECTIONS", default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
}

impl PaperRecord {
    /// Whether nothing at all was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_serializes_all_fields() {
        let json = serde_json::to_value(PaperRecord::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "TITLE": "",
                "METADATA": { "AUTHORS": [], "EMAILS": [], "AFFILIATIONS": [], "KEYWORDS": [] },
                "ABSTRACT": ""
            })
        );
    }

    #[test]
    fn test_sections_serialized_when_present() {
        let record = PaperRecord {
            sections: vec![Section { heading: "Introduction".into(), content: "Text.".into() }],
            ..PaperRecord::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["SECTIONS"][0]["HEADING"], "Introduction");
        assert_eq!(json["SECTIONS"][0]["CONTENT"], "Text.");
    }

    #[test]
    fn test_round_trip_from_consumer_json() {
        let json = r#"{"TITLE":"T","METADATA":{"AUTHORS":["A B"],"EMAILS":[],"AFFILIATIONS":[],"KEYWORDS":["k"]},"ABSTRACT":"x."}"#;
        let record: PaperRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "T");
        assert_eq!(record.metadata.keywords, vec!["k"]);
        assert!(record.sections.is_empty());
        assert!(!record.is_empty());
    }
}
