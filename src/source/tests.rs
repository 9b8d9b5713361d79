#[cfg(test)]
mod tests {
    use crate::source::{ExtractError, PageSource, PdfSource, TextSource, source_for_path};
    use crate::ProtocolIndex;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn text_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    // ========================================================================
    // TextSource Tests
    // ========================================================================

    #[test]
    fn test_split_on_form_feed() {
        let pages = TextSource::split_pages("page one\x0cpage two\x0c");
        assert_eq!(
            pages,
            vec![Some("page one".to_string()), Some("page two".to_string())]
        );
    }

    #[test]
    fn test_blank_page_is_none() {
        let pages = TextSource::split_pages("a\x0c  \n\x0cb");
        assert_eq!(pages, vec![Some("a".to_string()), None, Some("b".to_string())]);
    }

    #[test]
    fn test_no_form_feed_is_one_page() {
        assert_eq!(
            TextSource::split_pages("1. DENGUE\ntexto"),
            vec![Some("1. DENGUE\ntexto".to_string())]
        );
    }

    #[test]
    fn test_extract_from_file() {
        let file = text_file("1. DENGUE\nfebre\x0c2. ZIKA\nexantema\x0c");
        let source = TextSource::new(file.path());

        let pages = source.extract_pages().unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[test]
    fn test_missing_text_file_is_io_error() {
        let source = TextSource::new("/nonexistent/protocolo.txt");
        assert!(matches!(source.extract_pages(), Err(ExtractError::Io(_))));
    }

    // ========================================================================
    // PdfSource Tests
    // ========================================================================

    #[test]
    fn test_invalid_pdf_is_error() {
        let file = text_file("not a pdf at all");
        let source = PdfSource::new(file.path());

        let result = source.extract_pages();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to load PDF"));
    }

    #[test]
    fn test_invalid_pdf_loads_empty_index() {
        let file = text_file("plain text, no PDF header");
        let index = ProtocolIndex::load(&PdfSource::new(file.path()));
        assert!(index.is_empty());
    }

    // ========================================================================
    // Source Selection Tests
    // ========================================================================

    #[test]
    fn test_source_for_text_file() {
        let file = text_file("1. TRATAMENTO DA DENGUE\nsoro oral");
        let source = source_for_path(file.path());

        let index = ProtocolIndex::load(source.as_ref());
        assert_eq!(index.headings(), vec!["1. TRATAMENTO DA DENGUE"]);
    }

    #[test]
    fn test_source_for_pdf_extension_case_insensitive() {
        let source = source_for_path("/nonexistent/PROTOCOLO.PDF");
        assert!(matches!(source.extract_pages(), Err(ExtractError::Pdf(_))));
    }
}
