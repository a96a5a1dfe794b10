//! Parse state tracking.
//!
//! `ParseState` holds everything accumulated while walking one transcript. It
//! is owned by the `Segmenter` for the duration of a single parse and turned
//! into a `PaperRecord` at the end.

use indexmap::IndexSet;
use log::debug;

use crate::finalize::finalize_block;
use crate::result::{PaperMetadata, PaperRecord, Section};

/// Which logical region of the page is currently open.
///
/// Phases only move forward: `BeforeTitle → Metadata → Abstract → Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Phase {
    /// No title seen yet; lines are ignored.
    #[default]
    BeforeTitle,
    /// Between the title and the abstract: authors, emails, affiliations.
    Metadata,
    /// Collecting abstract fragments.
    Abstract,
    /// Past the abstract: keywords and (optionally) body sections.
    Done,
}

/// A body section whose content is still being collected.
#[derive(Debug)]
struct OpenSection {
    heading: String,
    lines: Vec<String>,
}

/// Mutable accumulation state for one document.
#[derive(Debug, Default)]
pub struct ParseState {
    /// Title, set at most once.
    pub title: Option<String>,

    phase: Phase,

    /// Author names (exact-match deduplicated).
    pub authors: IndexSet<String>,

    /// Email addresses (exact-match deduplicated).
    pub emails: IndexSet<String>,

    /// Affiliation strings (exact-match deduplicated, author-free on insert).
    pub affiliations: IndexSet<String>,

    /// Keywords in source order.
    pub keywords: Vec<String>,

    /// Abstract fragments in source order.
    pub abstract_fragments: Vec<String>,

    /// Finished body sections.
    pub sections: Vec<Section>,

    open_section: Option<OpenSection>,
}

impl ParseState {
    /// Create an empty state in `Phase::BeforeTitle`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Move to `next`. Backward transitions are ignored.
    pub fn enter(&mut self, next: Phase) {
        if next > self.phase {
            debug!("phase {:?} -> {:?}", self.phase, next);
            self.phase = next;
        }
    }

    /// Set the title unless one is already set. Returns whether it was set.
    pub fn set_title(&mut self, title: &str) -> bool {
        if self.title.is_some() {
            return false;
        }
        self.title = Some(title.trim().to_string());
        true
    }

    /// Close the current body section (if any) and open a new one.
    pub fn open_section(&mut self, heading: &str) {
        self.close_section();
        self.open_section = Some(OpenSection {
            heading: heading.trim().to_string(),
            lines: Vec::new(),
        });
    }

    /// Append a line to the open body section. Ignored when none is open.
    pub fn push_section_line(&mut self, line: &str) {
        if let Some(section) = self.open_section.as_mut() {
            section.lines.push(line.to_string());
        }
    }

    /// Finalize the open body section. Sections left empty are dropped.
    pub fn close_section(&mut self) {
        if let Some(section) = self.open_section.take() {
            let content = finalize_block(&section.lines);
            if content.is_empty() {
                debug!("dropping empty section {:?}", section.heading);
            } else {
                self.sections.push(Section { heading: section.heading, content });
            }
        }
    }

    /// Consume the state into the output record.
    #[must_use]
    pub fn into_record(mut self) -> PaperRecord {
        self.close_section();

        PaperRecord {
            title: self.title.unwrap_or_default(),
            metadata: PaperMetadata {
                authors: self.authors.into_iter().collect(),
                emails: self.emails.into_iter().collect(),
                affiliations: self.affiliations.into_iter().collect(),
                keywords: self.keywords,
            },
            abstract_text: self.abstract_fragments.join(" ").trim().to_string(),
            sections: self.sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_before_title() {
        let state = ParseState::new();
        assert_eq!(state.phase(), Phase::BeforeTitle);
        assert!(state.title.is_none());
    }

    #[test]
    fn test_phase_is_monotonic() {
        let mut state = ParseState::new();
        state.enter(Phase::Abstract);
        state.enter(Phase::Metadata);
        assert_eq!(state.phase(), Phase::Abstract);
        state.enter(Phase::Done);
        assert_eq!(state.phase(), Phase::Done);
    }

    #[test]
    fn test_title_set_once() {
        let mut state = ParseState::new();
        assert!(state.set_title("  First  "));
        assert!(!state.set_title("Second"));
        assert_eq!(state.title.as_deref(), Some("First"));
    }

    #[test]
    fn test_sections_are_finalized() {
        let mut state = ParseState::new();
        state.open_section("Introduction");
        state.push_section_line("Deep nets work.");
        state.push_section_line("In the next");
        state.open_section("Empty");
        state.push_section_line("no sentence end");
        let record = state.into_record();
        assert_eq!(
            record.sections,
            vec![Section { heading: "Introduction".into(), content: "Deep nets work.".into() }]
        );
    }

    #[test]
    fn test_push_without_open_section_is_ignored() {
        let mut state = ParseState::new();
        state.push_section_line("orphan.");
        assert!(state.into_record().sections.is_empty());
    }

    #[test]
    fn test_into_record_joins_abstract() {
        let mut state = ParseState::new();
        state.abstract_fragments.push("We study X".into());
        state.abstract_fragments.push("and Y.".into());
        state.authors.insert("Jane Doe".into());
        state.authors.insert("Jane Doe".into());
        let record = state.into_record();
        assert_eq!(record.abstract_text, "We study X and Y.");
        assert_eq!(record.metadata.authors, vec!["Jane Doe"]);
    }
}
