//! Document splitting
//!
//! Extracts an inclusive page range from a source document into a new
//! document of independent page copies.

use super::{OperationResult, PageRange};
use crate::document::Document;

/// Input for a split: the requested 1-indexed page range, possibly out of
/// bounds. The range is clamped against the source before extraction.
#[derive(Debug, Clone, Copy)]
pub struct SplitRequest {
    pub range: PageRange,
}

impl SplitRequest {
    pub fn new(range: PageRange) -> Self {
        Self { range }
    }

    /// A request covering every page of a document of `total_pages`.
    pub fn all(total_pages: usize) -> Self {
        Self::new(PageRange::new(1, total_pages.max(1)))
    }
}

/// Extract the clamped page range from `source` into a new document.
///
/// The output pages are independent copies; mutating them cannot affect the
/// source. A range that clamps to nothing (empty source, or `from` beyond
/// the last page) yields an *empty* document rather than an error.
pub fn split_range(source: &Document, request: &SplitRequest) -> OperationResult<Document> {
    let mut output = Document::new();
    if let Some(title) = source.title() {
        output.set_title(title);
    }
    if let Some(author) = source.author() {
        output.set_author(author);
    }

    let Some(range) = request.range.clamp(source.page_count()) else {
        tracing::debug!(
            from = request.range.from,
            to = request.range.to,
            total = source.page_count(),
            "split range clamped to empty; producing empty document"
        );
        return Ok(output);
    };

    let indices: Vec<usize> = range.collect();
    for page in Document::copy_pages(source, &indices)? {
        output.add_page(page);
    }

    tracing::debug!(pages = output.page_count(), "split document");
    Ok(output)
}
