//! Uniform document resizing.

use super::{OperationError, OperationResult};
use crate::document::Document;

/// Input for a resize: one uniform scale factor applied to every page.
///
/// Callers typically bound the factor (0.25 to 2.0) but the engine accepts
/// any positive finite value.
#[derive(Debug, Clone, Copy)]
pub struct ResizeRequest {
    pub factor: f64,
}

impl ResizeRequest {
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }

    /// Convenience for percentage input (`100` -> factor `1.0`).
    pub fn from_percent(percent: f64) -> Self {
        Self::new(percent / 100.0)
    }
}

/// Scale every page's size and content by the same factor.
///
/// Width, height, and the content coordinate space all scale together, so
/// the rendered appearance is a uniform zoom rather than a stretch. Fails
/// with [`OperationError::InvalidScale`] for factors that are not strictly
/// positive (including NaN); the document is left untouched on failure.
pub fn resize_document(document: &mut Document, request: &ResizeRequest) -> OperationResult<()> {
    let factor = request.factor;
    if !factor.is_finite() || factor <= 0.0 {
        return Err(OperationError::InvalidScale(factor));
    }

    for index in 0..document.page_count() {
        if let Some(page) = document.get_page_mut(index) {
            let (width, height) = page.size();
            page.set_size(width * factor, height * factor);
            page.scale_content(factor, factor);
        }
    }

    tracing::debug!(factor, pages = document.page_count(), "resized document");
    Ok(())
}
