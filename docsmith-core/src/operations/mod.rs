//! Document transformation operations
//!
//! This module provides the engine operations that create, mutate, and
//! recombine documents: merging, splitting, page editing, resizing, the
//! import pipelines, and the degraded text-extraction stub.

pub mod edit;
pub mod extract_text;
pub mod import_images;
pub mod import_table;
pub mod import_text;
pub mod merge;
pub mod resize;
pub mod split;

pub use edit::{add_text, delete_pages, DeleteRequest, TextPlacement};
pub use extract_text::{extract_text_summary, ExtractRequest};
pub use import_images::{import_images, ImageImportOptions, ImageInput};
pub use import_table::{import_delimited, TableImportOptions};
pub use import_text::{import_text, TextImportOptions};
pub use merge::{merge_documents, MergeRequest};
pub use resize::{resize_document, ResizeRequest};
pub use split::{split_range, SplitRequest};

use crate::error::DocError;

/// Result type for operations
pub type OperationResult<T> = Result<T, OperationError>;

/// Operation-specific errors
///
/// Every variant is terminal for the current operation: an operation either
/// fully succeeds or fails with the caller's input logically unchanged.
#[derive(Debug, thiserror::Error)]
pub enum OperationError {
    /// Page index out of bounds
    #[error("Page index {0} out of bounds (document has {1} pages)")]
    PageIndexOutOfBounds(usize, usize),

    /// Invalid page range
    #[error("Invalid page range: {0}")]
    InvalidRange(String),

    /// Merge invoked with too few source documents
    #[error("Merge requires at least 2 documents, got {0}")]
    InsufficientInput(usize),

    /// No valid pages, rows, images, or text to process
    #[error("Nothing to process: {0}")]
    EmptyInput(String),

    /// Scale factor must be a positive number
    #[error("Invalid scale factor {0} (must be > 0)")]
    InvalidScale(f64),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document or codec error
    #[error("Document error: {0}")]
    Document(#[from] DocError),
}

/// A closed interval of 1-indexed page numbers.
///
/// Construction never validates against a document; [`PageRange::clamp`]
/// resolves the range against an actual page count, and a range that clamps
/// to nothing is represented as `None` rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    /// First page, 1-indexed, inclusive.
    pub from: usize,
    /// Last page, 1-indexed, inclusive.
    pub to: usize,
}

impl PageRange {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Parse a range from a string: `"3"` or `"2-5"` (1-indexed, inclusive).
    pub fn parse(s: &str) -> Result<Self, OperationError> {
        let s = s.trim();

        if let Ok(page) = s.parse::<usize>() {
            if page == 0 {
                return Err(OperationError::InvalidRange(
                    "Page numbers start at 1".to_string(),
                ));
            }
            return Ok(Self::new(page, page));
        }

        if let Some((start, end)) = s.split_once('-') {
            let start = start
                .trim()
                .parse::<usize>()
                .map_err(|_| OperationError::InvalidRange(format!("Invalid start: {start}")))?;
            let end = end
                .trim()
                .parse::<usize>()
                .map_err(|_| OperationError::InvalidRange(format!("Invalid end: {end}")))?;

            if start == 0 || end == 0 {
                return Err(OperationError::InvalidRange(
                    "Page numbers start at 1".to_string(),
                ));
            }
            if start > end {
                return Err(OperationError::InvalidRange(format!(
                    "Start {start} is greater than end {end}"
                )));
            }
            return Ok(Self::new(start, end));
        }

        Err(OperationError::InvalidRange(format!("Invalid format: {s}")))
    }

    /// Clamp against `total_pages` and convert to 0-indexed bounds.
    ///
    /// `from` is raised to 1, `to` lowered to `total_pages`. Returns `None`
    /// when the clamped interval is empty (empty document, or `from` beyond
    /// the last page).
    pub fn clamp(&self, total_pages: usize) -> Option<std::ops::RangeInclusive<usize>> {
        let from = self.from.max(1);
        let to = self.to.min(total_pages);
        if total_pages == 0 || from > to {
            None
        } else {
            Some(from - 1..=to - 1)
        }
    }
}

/// A set of 1-indexed page numbers to remove, as supplied by the caller:
/// possibly duplicated, unsorted, or out of range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionSet(Vec<usize>);

impl DeletionSet {
    pub fn new(pages: Vec<usize>) -> Self {
        Self(pages)
    }

    /// Parse a comma-separated list of 1-indexed page numbers: `"1, 3, 5"`.
    pub fn parse(s: &str) -> Result<Self, OperationError> {
        let pages: Result<Vec<usize>, _> = s
            .split(',')
            .map(|p| {
                p.trim()
                    .parse::<usize>()
                    .map_err(|_| OperationError::InvalidRange(format!("Invalid page: {p}")))
            })
            .collect();
        Ok(Self(pages?))
    }

    /// Resolve against a page count: convert to 0-indexed, drop out-of-range
    /// entries, deduplicate, and sort **descending**.
    ///
    /// Descending order is load-bearing: removing pages bottom-up keeps the
    /// remaining indices valid as earlier pages are untouched by later
    /// removals.
    pub fn normalize(&self, total_pages: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .0
            .iter()
            .filter(|&&p| p >= 1 && p <= total_pages)
            .map(|&p| p - 1)
            .collect();
        indices.sort_unstable_by(|a, b| b.cmp(a));
        indices.dedup();
        indices
    }

    /// The raw, unvalidated page numbers.
    pub fn pages(&self) -> &[usize] {
        &self.0
    }
}
