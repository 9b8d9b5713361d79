use super::{ExtractError, PageSource};
use std::path::{Path, PathBuf};

/// Page break character written by `pdftotext` and similar tools
pub const PAGE_BREAK: char = '\x0c';

/// Page source backed by an already-extracted text file
///
/// Pages are separated by form feeds; a file without any is one page.
pub struct TextSource {
    path: PathBuf,
}

impl TextSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Split extracted text into pages
    pub fn split_pages(text: &str) -> Vec<Option<String>> {
        let mut pages: Vec<&str> = text.split(PAGE_BREAK).collect();
        // pdftotext ends the last page with a form feed too
        if pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
            pages.pop();
        }

        pages
            .into_iter()
            .map(|page| (!page.trim().is_empty()).then(|| page.to_string()))
            .collect()
    }
}

impl PageSource for TextSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn extract_pages(&self) -> Result<Vec<Option<String>>, ExtractError> {
        let bytes = std::fs::read(&self.path)?;
        let text = String::from_utf8_lossy(&bytes);
        Ok(Self::split_pages(&text))
    }
}
