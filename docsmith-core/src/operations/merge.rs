//! Document merging
//!
//! Concatenates the page sequences of two or more source documents into a
//! single new document, preserving input order and each source's internal
//! page order.

use super::{OperationError, OperationResult};
use crate::document::Document;

/// Input for a merge: an ordered list of decoded source documents.
#[derive(Debug, Default)]
pub struct MergeRequest {
    pub documents: Vec<Document>,
}

impl MergeRequest {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }
}

/// Merge all source documents into a single new document.
///
/// Pages are copied, never moved: the sources are left unmodified and the
/// output owns independent page copies. Metadata (title, author) is taken
/// from the first source.
///
/// Fails with [`OperationError::InsufficientInput`] when fewer than two
/// documents are supplied; a merge of one document is a no-op the caller
/// should reject before invoking the engine.
pub fn merge_documents(request: &MergeRequest) -> OperationResult<Document> {
    if request.documents.len() < 2 {
        return Err(OperationError::InsufficientInput(request.documents.len()));
    }

    let mut output = Document::new();

    if let Some(first) = request.documents.first() {
        if let Some(title) = first.title() {
            output.set_title(title);
        }
        if let Some(author) = first.author() {
            output.set_author(author);
        }
    }

    for document in &request.documents {
        let indices: Vec<usize> = (0..document.page_count()).collect();
        for page in Document::copy_pages(document, &indices)? {
            output.add_page(page);
        }
    }

    tracing::debug!(
        sources = request.documents.len(),
        pages = output.page_count(),
        "merged documents"
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;

    /// Pages tagged by width so ordering is observable.
    fn doc_with_widths(widths: &[f64]) -> Document {
        let mut doc = Document::new();
        for &w in widths {
            doc.add_page(Page::new(w, 842.0));
        }
        doc
    }

    #[test]
    fn test_merge_concatenates_in_input_order() {
        let request = MergeRequest::new(vec![
            doc_with_widths(&[1.0, 2.0]),
            doc_with_widths(&[3.0]),
            doc_with_widths(&[4.0, 5.0, 6.0]),
        ]);

        let merged = merge_documents(&request).unwrap();
        assert_eq!(merged.page_count(), 6);

        let widths: Vec<f64> = merged.pages().iter().map(|p| p.width()).collect();
        assert_eq!(widths, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_merge_page_count_is_sum() {
        let counts = [3usize, 1, 4];
        let docs: Vec<Document> = counts
            .iter()
            .map(|&n| doc_with_widths(&vec![100.0; n]))
            .collect();

        let merged = merge_documents(&MergeRequest::new(docs)).unwrap();
        assert_eq!(merged.page_count(), counts.iter().sum::<usize>());
    }

    #[test]
    fn test_merge_leaves_sources_unmodified() {
        let a = doc_with_widths(&[1.0]);
        let b = doc_with_widths(&[2.0]);
        let request = MergeRequest::new(vec![a, b]);

        let _ = merge_documents(&request).unwrap();
        assert_eq!(request.documents[0].page_count(), 1);
        assert_eq!(request.documents[1].page_count(), 1);
    }

    #[test]
    fn test_merge_takes_metadata_from_first() {
        let mut a = doc_with_widths(&[1.0]);
        a.set_title("first");
        let mut b = doc_with_widths(&[2.0]);
        b.set_title("second");

        let merged = merge_documents(&MergeRequest::new(vec![a, b])).unwrap();
        assert_eq!(merged.title(), Some("first"));
    }

    #[test]
    fn test_merge_rejects_fewer_than_two() {
        let err = merge_documents(&MergeRequest::new(vec![])).unwrap_err();
        assert!(matches!(err, OperationError::InsufficientInput(0)));

        let err =
            merge_documents(&MergeRequest::new(vec![doc_with_widths(&[1.0])])).unwrap_err();
        assert!(matches!(err, OperationError::InsufficientInput(1)));
    }

    #[test]
    fn test_merge_with_empty_source_documents() {
        // Empty sources contribute zero pages but are still legal inputs.
        let merged = merge_documents(&MergeRequest::new(vec![
            doc_with_widths(&[]),
            doc_with_widths(&[7.0]),
        ]))
        .unwrap();
        assert_eq!(merged.page_count(), 1);
    }
}
