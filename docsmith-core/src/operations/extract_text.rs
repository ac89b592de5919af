//! Degraded text extraction.
//!
//! This is intentionally not a faithful conversion: it produces a labeled
//! summary (source name, page count, fixed notice) so the output can never
//! be mistaken for a format-preserving export.

use crate::document::Document;

/// Input for the extraction stub: the document plus the display name used
/// in the summary header.
#[derive(Debug, Clone)]
pub struct ExtractRequest {
    pub source_name: String,
}

impl ExtractRequest {
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
        }
    }
}

/// Produce the textual summary for a document.
///
/// The output is plain text, always non-authoritative, and has no failure
/// modes of its own; only decoding the source can fail upstream.
pub fn extract_text_summary(document: &Document, request: &ExtractRequest) -> String {
    let mut out = String::new();
    out.push_str(&format!("Document: {}\n\n", request.source_name));
    out.push_str(&format!("Total Pages: {}\n\n", document.page_count()));
    out.push_str(
        "Note: full formatting-preserving conversion is not supported.\n\
         This is a simplified text extraction.\n\n",
    );
    out.push_str("--- Document Content ---\n\n");

    for (index, page) in document.pages().iter().enumerate() {
        let (width, height) = page.size();
        out.push_str(&format!(
            "[Page {}: {:.0}x{:.0} pts, {} content element(s)]\n",
            index + 1,
            width,
            height,
            page.content().len()
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;

    #[test]
    fn test_summary_includes_name_and_page_count() {
        let mut doc = Document::new();
        doc.add_page(Page::a4());
        doc.add_page(Page::a4());

        let summary = extract_text_summary(&doc, &ExtractRequest::new("report.doc"));
        assert!(summary.contains("Document: report.doc"));
        assert!(summary.contains("Total Pages: 2"));
    }

    #[test]
    fn test_summary_is_labeled_non_authoritative() {
        let doc = Document::new();
        let summary = extract_text_summary(&doc, &ExtractRequest::new("x"));
        assert!(summary.contains("simplified text extraction"));
        assert!(summary.contains("not supported"));
    }

    #[test]
    fn test_summary_lists_page_sizes() {
        let mut doc = Document::new();
        doc.add_page(Page::new(612.0, 792.0));

        let summary = extract_text_summary(&doc, &ExtractRequest::new("x"));
        assert!(summary.contains("[Page 1: 612x792 pts, 0 content element(s)]"));
    }
}
