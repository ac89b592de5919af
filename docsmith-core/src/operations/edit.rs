//! Page editing: text insertion and page deletion.

use super::{DeletionSet, OperationError, OperationResult};
use crate::document::Document;
use crate::geometry::from_top_left;
use crate::graphics::Color;
use crate::text::Font;

/// Font used for inserted text. One face at one size; the editor does not
/// expose typography.
pub const EDIT_FONT: Font = Font::Helvetica;
pub const EDIT_FONT_SIZE: f64 = 12.0;

/// A text insertion: the string, a 1-indexed target page, and a position in
/// top-left-origin coordinates (y grows downward).
#[derive(Debug, Clone)]
pub struct TextPlacement {
    pub text: String,
    pub page_number: usize,
    pub x: f64,
    pub y: f64,
}

impl TextPlacement {
    pub fn new(text: impl Into<String>, page_number: usize, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            page_number,
            x,
            y,
        }
    }
}

/// Draw `placement.text` on the target page.
///
/// The page number is clamped into the document: a number past the end
/// resolves to the last page rather than erroring. The y coordinate is
/// converted to the native bottom-left origin (`native_y = height - y`).
/// No bounds validation is performed on the position; text placed outside
/// the visible page area is accepted silently.
pub fn add_text(document: &mut Document, placement: &TextPlacement) -> OperationResult<()> {
    if document.page_count() == 0 {
        return Err(OperationError::EmptyInput(
            "document has no pages".to_string(),
        ));
    }

    let total_pages = document.page_count();
    let index = placement.page_number.saturating_sub(1).min(total_pages - 1);
    let page = document
        .get_page_mut(index)
        .ok_or(OperationError::PageIndexOutOfBounds(index, total_pages))?;

    let native_y = from_top_left(placement.y, page.height());
    page.draw_text(
        &placement.text,
        placement.x,
        native_y,
        EDIT_FONT,
        EDIT_FONT_SIZE,
        Color::black(),
    );

    tracing::debug!(page = index + 1, "inserted text");
    Ok(())
}

/// Input for a deletion: raw 1-indexed page numbers, possibly with
/// duplicates or out-of-range values.
#[derive(Debug, Clone, Default)]
pub struct DeleteRequest {
    pub pages: DeletionSet,
}

impl DeleteRequest {
    pub fn new(pages: DeletionSet) -> Self {
        Self { pages }
    }
}

/// Remove the requested pages from the document; returns how many were
/// removed.
///
/// The set is deduplicated, bounds-filtered, and removed in **descending**
/// index order so that earlier removals cannot shift the indices of later
/// ones. If nothing survives the filter the document is left untouched and
/// [`OperationError::EmptyInput`] is returned, so a caller cannot mistake an
/// all-out-of-range request for a successful edit.
pub fn delete_pages(document: &mut Document, request: &DeleteRequest) -> OperationResult<usize> {
    let indices = request.pages.normalize(document.page_count());
    if indices.is_empty() {
        return Err(OperationError::EmptyInput(
            "no valid pages to delete".to_string(),
        ));
    }

    for &index in &indices {
        document.remove_page(index)?;
    }

    tracing::debug!(removed = indices.len(), "deleted pages");
    Ok(indices.len())
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod edit_tests;
