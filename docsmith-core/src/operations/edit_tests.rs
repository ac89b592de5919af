//! Tests for text insertion and page deletion.

#[cfg(test)]
mod tests {
    use crate::document::Document;
    use crate::operations::edit::*;
    use crate::operations::{DeletionSet, OperationError};
    use crate::page::{ContentOp, Page};

    fn doc_with_widths(widths: &[f64]) -> Document {
        let mut doc = Document::new();
        for &w in widths {
            doc.add_page(Page::new(w, 842.0));
        }
        doc
    }

    fn doc_with_pages(count: usize) -> Document {
        doc_with_widths(&vec![595.0; count])
    }

    #[test]
    fn test_add_text_converts_top_left_y() {
        let mut doc = Document::new();
        doc.add_page(Page::new(600.0, 800.0));

        add_text(&mut doc, &TextPlacement::new("hello", 1, 10.0, 20.0)).unwrap();

        match &doc.get_page(0).unwrap().content()[0] {
            ContentOp::Text { text, x, y, .. } => {
                assert_eq!(text, "hello");
                assert_eq!(*x, 10.0);
                assert_eq!(*y, 780.0); // 800 - 20
            }
            other => panic!("expected text op, got {other:?}"),
        }
    }

    #[test]
    fn test_add_text_clamps_page_number_to_last_page() {
        let mut doc = doc_with_pages(3);
        add_text(&mut doc, &TextPlacement::new("tail", 99, 5.0, 5.0)).unwrap();

        assert!(doc.get_page(0).unwrap().content().is_empty());
        assert!(doc.get_page(1).unwrap().content().is_empty());
        assert_eq!(doc.get_page(2).unwrap().content().len(), 1);
    }

    #[test]
    fn test_add_text_page_zero_resolves_to_first_page() {
        let mut doc = doc_with_pages(2);
        add_text(&mut doc, &TextPlacement::new("head", 0, 5.0, 5.0)).unwrap();
        assert_eq!(doc.get_page(0).unwrap().content().len(), 1);
    }

    #[test]
    fn test_add_text_out_of_bounds_position_is_accepted() {
        let mut doc = doc_with_pages(1);
        add_text(&mut doc, &TextPlacement::new("off", 1, -50.0, 99999.0)).unwrap();
        assert_eq!(doc.get_page(0).unwrap().content().len(), 1);
    }

    #[test]
    fn test_add_text_on_empty_document_fails() {
        let mut doc = Document::new();
        let err = add_text(&mut doc, &TextPlacement::new("x", 1, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, OperationError::EmptyInput(_)));
    }

    #[test]
    fn test_delete_pages_removes_requested_pages() {
        // Deleting {2, 4} from a 5-page document keeps pages {1, 3, 5}.
        let mut doc = doc_with_widths(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let removed =
            delete_pages(&mut doc, &DeleteRequest::new(DeletionSet::new(vec![2, 4]))).unwrap();

        assert_eq!(removed, 2);
        let widths: Vec<f64> = doc.pages().iter().map(|p| p.width()).collect();
        assert_eq!(widths, vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_ascending_removal_would_delete_wrong_pages() {
        // Demonstrates why descending order is load-bearing: removing index
        // 1 first shifts page 4 down to index 2, so removing index 3 next
        // deletes the original page 5.
        let mut doc = doc_with_widths(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        doc.remove_page(1).unwrap();
        doc.remove_page(3).unwrap();

        let widths: Vec<f64> = doc.pages().iter().map(|p| p.width()).collect();
        assert_eq!(widths, vec![1.0, 3.0, 4.0]); // not {1, 3, 5}
    }

    #[test]
    fn test_delete_pages_ignores_duplicates_and_out_of_range() {
        let mut doc = doc_with_widths(&[1.0, 2.0, 3.0]);
        let removed = delete_pages(
            &mut doc,
            &DeleteRequest::new(DeletionSet::new(vec![2, 2, 0, 50])),
        )
        .unwrap();

        assert_eq!(removed, 1);
        let widths: Vec<f64> = doc.pages().iter().map(|p| p.width()).collect();
        assert_eq!(widths, vec![1.0, 3.0]);
    }

    #[test]
    fn test_delete_pages_empty_set_errors_and_leaves_document_intact() {
        let mut doc = doc_with_pages(3);
        let err = delete_pages(
            &mut doc,
            &DeleteRequest::new(DeletionSet::new(vec![10, 20])),
        )
        .unwrap_err();

        assert!(matches!(err, OperationError::EmptyInput(_)));
        assert_eq!(doc.page_count(), 3);
    }

    #[test]
    fn test_delete_all_pages_yields_empty_document() {
        let mut doc = doc_with_pages(2);
        let removed =
            delete_pages(&mut doc, &DeleteRequest::new(DeletionSet::new(vec![1, 2]))).unwrap();
        assert_eq!(removed, 2);
        assert_eq!(doc.page_count(), 0);
    }
}
