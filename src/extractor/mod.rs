//! Per-line entity extractors.
//!
//! Every extractor is a pure function over one line of text. None of them keep
//! state between calls; accumulation happens in the segmenter's `ParseState`.
//!
//! # Module Structure
//!
//! - `email`: email addresses, including `{a,b}@domain` shorthand (raw text)
//! - `affiliation`: institution phrases, regex plus classifier confirmation
//! - `author`: person names, heuristic or classifier based
//! - `markers`: abstract and keyword section markers

pub mod affiliation;
pub mod author;
pub mod email;
pub mod markers;

pub use affiliation::extract_affiliations;
pub use author::extract_authors;
pub use email::{extract_emails, strip_emails};
pub use markers::{has_keyword_marker, inline_keywords, is_abstract_start, split_keywords};
