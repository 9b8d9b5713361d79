use super::{Section, SectionParser};
use crate::source::PageSource;
use std::collections::HashMap;
use std::time::Instant;

/// Immutable, ordered mapping of heading -> body text
///
/// Built once from a document and then only read. Iteration follows the
/// order in which headings were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtocolIndex {
    sections: Vec<Section>,
    positions: HashMap<String, usize>,
}

/// Mutable builder for constructing a protocol index
#[derive(Debug, Default)]
pub struct ProtocolIndexBuilder {
    sections: Vec<Section>,
    positions: HashMap<String, usize>,
}

impl ProtocolIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a body fragment to a heading
    ///
    /// The first occurrence of a heading creates its entry; later occurrences
    /// append to the existing body instead of replacing it.
    pub fn append(&mut self, heading: &str, fragment: &str) {
        let heading = heading.trim();
        if heading.is_empty() {
            return;
        }
        let fragment = fragment.trim();

        match self.positions.get(heading) {
            Some(&at) => self.sections[at].append_fragment(fragment),
            None => {
                self.positions
                    .insert(heading.to_string(), self.sections.len());
                self.sections.push(Section::new(heading, fragment));
            }
        }
    }

    /// Freeze the builder into an index
    pub fn build(self) -> ProtocolIndex {
        ProtocolIndex {
            sections: self.sections,
            positions: self.positions,
        }
    }
}

impl ProtocolIndex {
    /// Extract pages from `source` and parse them into an index
    ///
    /// Never fails: if extraction fails the error is logged and an empty
    /// index is returned, so callers always have something to query.
    pub fn load(source: &dyn PageSource) -> Self {
        let started = Instant::now();
        let pages = match source.extract_pages() {
            Ok(pages) => pages,
            Err(e) => {
                tracing::warn!(
                    "Protocol extraction failed for {}: {}; continuing with an empty index",
                    source.describe(),
                    e
                );
                return Self::default();
            }
        };

        let blank_pages = pages.iter().filter(|page| page.is_none()).count();
        let index = SectionParser::new().parse_extracted(&pages);

        tracing::info!(
            "Indexed {}: {} pages ({} without text), {} sections [{:.2}s]",
            source.describe(),
            pages.len(),
            blank_pages,
            index.len(),
            started.elapsed().as_secs_f64()
        );
        index
    }

    /// Get a section by its exact heading
    pub fn get(&self, heading: &str) -> Option<&Section> {
        self.positions.get(heading).map(|&at| &self.sections[at])
    }

    /// Find the first section whose heading contains `query`, ignoring case
    pub fn lookup(&self, query: &str) -> Option<&Section> {
        super::lookup(self, query)
    }

    /// Iterate sections in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// All sections in first-seen order
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Headings in first-seen order
    pub fn headings(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.heading.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl<'a> IntoIterator for &'a ProtocolIndex {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
