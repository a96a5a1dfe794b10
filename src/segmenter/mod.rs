//! Section segmenter.
//!
//! Walks the tagged lines once, keeps track of which region of the page is open
//! and routes each line to the right extractors and output fields.
//!
//! # Module Structure
//!
//! - `state`: `ParseState` and the `Phase` enum
//! - `keywords`: look-ahead over TITLE-led keyword blocks
//!
//! # Transitions
//!
//! | Phase       | Line                          | Effect                                         |
//! |-------------|-------------------------------|------------------------------------------------|
//! | BeforeTitle | TITLE                         | set title, → Metadata                          |
//! | Metadata    | "abstract" in first chars     | → Abstract, remainder is first fragment        |
//! | Metadata    | keyword marker                | keywords                                       |
//! | Metadata    | anything else                 | emails, authors, affiliations                  |
//! | Abstract    | keyword marker                | → Done, keywords                               |
//! | Abstract    | TITLE                         | → Done, line reprocessed                       |
//! | Abstract    | anything else                 | fragment; ends the abstract on a final period  |
//! | Done        | keyword marker                | keywords                                       |
//! | Done        | TITLE / plain                 | body sections when enabled                     |

pub mod keywords;
pub mod state;

use log::debug;

use crate::classifier::EntityClassifier;
use crate::disambiguate::add_affiliation;
use crate::extractor::markers::strip_abstract_marker;
use crate::extractor::{
    extract_affiliations, extract_authors, extract_emails, has_keyword_marker, inline_keywords,
    is_abstract_start, strip_emails,
};
use crate::normalize::normalize;
use crate::options::Options;
use crate::result::PaperRecord;
use crate::transcript::TaggedLine;

pub use keywords::scan_keyword_block;
pub use state::{ParseState, Phase};

/// Single-pass segmentation state machine for one document.
pub struct Segmenter<'a> {
    options: &'a Options,
    classifier: &'a dyn EntityClassifier,
    state: ParseState,
}

impl<'a> Segmenter<'a> {
    /// Create a segmenter with a fresh `ParseState`.
    #[must_use]
    pub fn new(options: &'a Options, classifier: &'a dyn EntityClassifier) -> Self {
        Self {
            options,
            classifier,
            state: ParseState::new(),
        }
    }

    /// Read access to the accumulated state.
    #[must_use]
    pub fn state(&self) -> &ParseState {
        &self.state
    }

    /// Process the line at `lines[0]` and return how many lines were consumed.
    ///
    /// Returns `0` when the line ended the abstract and must be processed again
    /// under the new phase. Every phase change of that kind moves forward, so a
    /// line is reprocessed at most once.
    pub fn step(&mut self, lines: &[TaggedLine]) -> usize {
        let Some(line) = lines.first() else {
            return 0;
        };

        match self.state.phase() {
            Phase::BeforeTitle => {
                if line.is_title() && self.state.set_title(&line.text) {
                    debug!("title: {:?}", line.text);
                    self.state.enter(Phase::Metadata);
                }
                1
            }
            Phase::Metadata => {
                let normalized = normalize(&line.text);
                if is_abstract_start(&normalized, self.options.abstract_marker_window) {
                    self.state.enter(Phase::Abstract);
                    let rest = strip_abstract_marker(&normalized, self.options.abstract_marker_window);
                    if !rest.is_empty() {
                        self.state.abstract_fragments.push(rest);
                    }
                    return 1;
                }
                if has_keyword_marker(&normalized) {
                    return self.take_keywords(lines, &normalized);
                }
                self.collect_metadata(line, &normalized);
                1
            }
            Phase::Abstract => {
                let normalized = normalize(&line.text);
                if has_keyword_marker(&normalized) {
                    self.state.enter(Phase::Done);
                    return self.take_keywords(lines, &normalized);
                }
                if line.is_title() {
                    self.state.enter(Phase::Done);
                    return 0;
                }
                if !normalized.is_empty() {
                    let ends_sentence = normalized.ends_with('.');
                    self.state.abstract_fragments.push(normalized);
                    if self.options.abstract_ends_at_period && ends_sentence {
                        self.state.enter(Phase::Done);
                    }
                }
                1
            }
            Phase::Done => {
                let normalized = normalize(&line.text);
                if has_keyword_marker(&normalized) {
                    return self.take_keywords(lines, &normalized);
                }
                if self.options.collect_sections {
                    if line.is_title() {
                        self.state.open_section(&line.text);
                    } else if !normalized.is_empty() {
                        self.state.push_section_line(&normalized);
                    }
                }
                1
            }
        }
    }

    /// Walk all lines and produce the record.
    #[must_use]
    pub fn run(mut self, lines: &[TaggedLine]) -> PaperRecord {
        let mut cursor = 0;
        while cursor < lines.len() {
            cursor += self.step(&lines[cursor..]);
        }
        self.finish()
    }

    /// Consume the segmenter into the record built so far.
    #[must_use]
    pub fn finish(self) -> PaperRecord {
        self.state.into_record()
    }

    /// Keywords from a marker line: look-ahead for TITLE headings, inline otherwise.
    fn take_keywords(&mut self, lines: &[TaggedLine], normalized: &str) -> usize {
        if lines[0].is_title() {
            let (found, consumed) = scan_keyword_block(lines, self.options.keyword_lookahead_slack);
            debug!("keyword block: {} keywords over {consumed} lines", found.len());
            self.state.keywords.extend(found);
            consumed
        } else {
            self.state.keywords.extend(inline_keywords(normalized));
            1
        }
    }

    /// Feed a metadata line to the email, author and affiliation extractors.
    ///
    /// Authors go first so the affiliations of this line are disambiguated
    /// against them as well as against every earlier line.
    fn collect_metadata(&mut self, line: &TaggedLine, normalized: &str) {
        self.state.emails.extend(extract_emails(&line.text));

        self.state
            .authors
            .extend(extract_authors(normalized, self.options, self.classifier));

        let scrubbed = normalize(&strip_emails(&line.text));
        for candidate in extract_affiliations(&scrubbed, self.classifier) {
            add_affiliation(&self.state.authors, &mut self.state.affiliations, &candidate);
        }
    }
}
