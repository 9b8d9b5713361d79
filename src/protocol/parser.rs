use super::{ProtocolIndex, ProtocolIndexBuilder, find_headings, join_pages, normalize};

/// Splits extracted document text into numbered sections
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionParser;

impl SectionParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse page texts into a protocol index
    ///
    /// # Arguments
    /// * `pages` - Page texts in page order
    ///
    /// # Returns
    /// Index of heading -> body. Text before the first heading is dropped;
    /// a document without headings yields an empty index.
    pub fn parse<I, S>(&self, pages: I) -> ProtocolIndex
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = normalize(&join_pages(pages));
        let spans = find_headings(&text);

        let mut builder = ProtocolIndexBuilder::new();
        for (i, span) in spans.iter().enumerate() {
            let body_end = spans.get(i + 1).map_or(text.len(), |next| next.start);
            builder.append(&text[span.range()], &text[span.end..body_end]);
        }
        builder.build()
    }

    /// Parse pages as returned by a page source
    ///
    /// Pages without text count as empty strings.
    pub fn parse_extracted(&self, pages: &[Option<String>]) -> ProtocolIndex {
        self.parse(pages.iter().map(|page| page.as_deref().unwrap_or_default()))
    }
}
