//! Text Extractor — best-effort plain-text transcription of an uploaded PDF.
//!
//! Pages are read in page-number order and their text is concatenated as-is.
//! A page that yields no text contributes an empty string; only a document
//! that cannot be loaded at all is an error.

use lopdf::Document;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("uploaded document is empty")]
    Empty,

    #[error("malformed PDF: {0}")]
    Malformed(#[from] lopdf::Error),
}

/// Extracts the text of every page of the PDF in `data`.
pub fn extract_text(data: &[u8]) -> Result<String, ExtractError> {
    if data.is_empty() {
        return Err(ExtractError::Empty);
    }

    let doc = Document::load_mem(data)?;
    let pages = doc.get_pages();

    let mut text = String::new();
    for page_num in pages.keys() {
        match doc.extract_text(&[*page_num]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => debug!("Page {page_num} yielded no text: {e}"),
        }
    }

    debug!(
        "Extracted {} chars from {} page(s)",
        text.len(),
        pages.len()
    );
    Ok(text)
}


#[cfg(test)]
mod tests {
    use super::fixtures::pdf_with_pages;
    use super::*;

    #[test]
    fn test_single_page_text_is_extracted() {
        let pdf = pdf_with_pages(&[Some("Python, SQL")]);
        let text = extract_text(&pdf).unwrap();
        assert!(text.contains("Python, SQL"), "got {text:?}");
    }

    #[test]
    fn test_pages_concatenate_in_document_order() {
        let pdf = pdf_with_pages(&[Some("Experience"), Some("Education")]);
        let text = extract_text(&pdf).unwrap();
        let first = text.find("Experience").unwrap();
        let second = text.find("Education").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_textless_page_does_not_fail_document() {
        let pdf = pdf_with_pages(&[None, Some("Rust")]);
        let text = extract_text(&pdf).unwrap();
        assert!(text.contains("Rust"));
    }

    #[test]
    fn test_all_textless_pages_yield_blank_text() {
        let pdf = pdf_with_pages(&[None, None]);
        let text = extract_text(&pdf).unwrap();
        assert!(text.trim().is_empty());
    }

    #[test]
    fn test_garbage_bytes_are_malformed() {
        let err = extract_text(b"this is not a pdf").unwrap_err();
        assert!(matches!(err, ExtractError::Malformed(_)));
    }

    #[test]
    fn test_empty_upload_is_rejected() {
        assert!(matches!(extract_text(&[]), Err(ExtractError::Empty)));
    }
}
