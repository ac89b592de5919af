//! Word-processor text import: raw text wrapped into measured lines.

use super::{OperationError, OperationResult};
use crate::document::Document;
use crate::layout::{paginate, ContentUnit, LayoutOptions};
use crate::text::{wrap_text, Font};

/// Layout policy for the raw-text importer.
#[derive(Debug, Clone)]
pub struct TextImportOptions {
    pub page_width: f64,
    pub page_height: f64,
    pub margin: f64,
    pub font: Font,
    pub font_size: f64,
    /// Cursor advance per wrapped line.
    pub line_advance: f64,
}

impl Default for TextImportOptions {
    fn default() -> Self {
        Self {
            page_width: 595.0,
            page_height: 842.0,
            margin: 56.0,
            font: Font::Helvetica,
            font_size: 12.0,
            line_advance: 18.0,
        }
    }
}

/// Convert a block of extracted raw text into a paginated document.
///
/// The text is wrapped against the content width using the font metrics,
/// then laid out one line per cursor advance, appending pages on overflow.
/// Fails with [`OperationError::EmptyInput`] when the text contains nothing
/// but whitespace.
pub fn import_text(text: &str, options: &TextImportOptions) -> OperationResult<Document> {
    if text.trim().is_empty() {
        return Err(OperationError::EmptyInput(
            "no text to convert".to_string(),
        ));
    }

    let content_width = options.page_width - 2.0 * options.margin;
    let lines = wrap_text(text, options.font, options.font_size, content_width);

    let units: Vec<ContentUnit> = lines
        .into_iter()
        .map(|line| ContentUnit::TextLine {
            text: line,
            font: options.font,
            size: options.font_size,
            advance: options.line_advance,
        })
        .collect();

    let layout = LayoutOptions {
        page_width: options.page_width,
        page_height: options.page_height,
        margin: options.margin,
        font: options.font,
        font_size: options.font_size,
        ..Default::default()
    };
    let document = paginate(units, &layout)?;
    tracing::debug!(pages = document.page_count(), "imported raw text");
    Ok(document)
}
