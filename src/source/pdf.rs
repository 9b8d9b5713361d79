use super::{ExtractError, PageSource};
use lopdf::Document;
use std::path::{Path, PathBuf};

/// Page source backed by a PDF file
pub struct PdfSource {
    path: PathBuf,
}

impl PdfSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PageSource for PdfSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn extract_pages(&self) -> Result<Vec<Option<String>>, ExtractError> {
        let doc = Document::load(&self.path).map_err(|e| ExtractError::Pdf(e.to_string()))?;

        let page_numbers: Vec<u32> = doc.get_pages().into_keys().collect();
        if page_numbers.is_empty() {
            return Err(ExtractError::NoPages(self.describe()));
        }

        let pages = page_numbers
            .into_iter()
            .map(|page_num| match doc.extract_text(&[page_num]) {
                Ok(text) if !text.trim().is_empty() => Some(text),
                Ok(_) => {
                    tracing::debug!("Page {} of {} has no text", page_num, self.describe());
                    None
                }
                Err(e) => {
                    tracing::debug!(
                        "Failed to extract page {} of {}: {}",
                        page_num,
                        self.describe(),
                        e
                    );
                    None
                }
            })
            .collect();

        Ok(pages)
    }
}
