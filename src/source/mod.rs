mod error;
mod pdf;
mod text;

#[cfg(test)]
mod tests;

pub use error::ExtractError;
pub use pdf::PdfSource;
pub use text::{PAGE_BREAK, TextSource};

use std::path::Path;

/// Document-text extraction collaborator
pub trait PageSource: Send + Sync {
    /// Human-readable name used in log lines (usually the file path)
    fn describe(&self) -> String;

    /// Extract text page by page, in page order
    ///
    /// # Returns
    /// One entry per page. `None` marks a page that produced no text
    /// (image-only or undecodable); an `Err` means the document as a whole
    /// could not be read.
    fn extract_pages(&self) -> Result<Vec<Option<String>>, ExtractError>;
}

/// Select a page source for a document path
///
/// Falls back to `TextSource` for anything that is not a PDF.
pub fn source_for_path(path: impl AsRef<Path>) -> Box<dyn PageSource> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => Box::new(PdfSource::new(path)),
        _ => Box::new(TextSource::new(path)),
    }
}
