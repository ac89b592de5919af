//! Tabular-text import: delimited rows laid out as fixed columns.

use super::{OperationError, OperationResult};
use crate::document::Document;
use crate::layout::{paginate, ContentUnit, LayoutOptions};
use crate::text::Font;

/// Layout policy for the tabular importer. All the original's silent magic
/// numbers live here as named fields.
#[derive(Debug, Clone)]
pub struct TableImportOptions {
    pub page_width: f64,
    pub page_height: f64,
    pub margin: f64,
    /// Cursor advance per row.
    pub row_advance: f64,
    pub font_size: f64,
    /// Hard truncation budget per cell, in characters. No wrapping, no
    /// measurement-based fitting.
    pub cell_char_budget: usize,
    /// Optional title drawn above the rows (typically the source name).
    pub title: Option<String>,
    pub title_size: f64,
    /// Cursor advance after the title line.
    pub title_advance: f64,
}

impl Default for TableImportOptions {
    fn default() -> Self {
        Self {
            page_width: 595.0,
            page_height: 842.0,
            margin: 42.0,
            row_advance: 22.0,
            font_size: 10.0,
            cell_char_budget: 20,
            title: None,
            title_size: 16.0,
            title_advance: 42.0,
        }
    }
}

/// Convert delimited text (one row per line, comma-separated cells) into a
/// paginated document.
///
/// Cells are trimmed, quote-stripped, and truncated to the character budget
/// before drawing; each row's cells share the content width equally. Blank
/// lines are skipped. Fails with [`OperationError::EmptyInput`] when no
/// non-blank rows remain.
pub fn import_delimited(text: &str, options: &TableImportOptions) -> OperationResult<Document> {
    let rows: Vec<&str> = text.lines().filter(|row| !row.trim().is_empty()).collect();
    if rows.is_empty() {
        return Err(OperationError::EmptyInput(
            "no rows to convert".to_string(),
        ));
    }

    let mut units = Vec::with_capacity(rows.len() + 1);
    if let Some(title) = &options.title {
        units.push(ContentUnit::TextLine {
            text: title.clone(),
            font: Font::HelveticaBold,
            size: options.title_size,
            advance: options.title_advance,
        });
    }

    for row in &rows {
        let cells: Vec<String> = row
            .split(',')
            .map(|cell| {
                cell.trim()
                    .replace('"', "")
                    .chars()
                    .take(options.cell_char_budget)
                    .collect()
            })
            .collect();
        units.push(ContentUnit::TableRow { cells });
    }

    let layout = LayoutOptions {
        page_width: options.page_width,
        page_height: options.page_height,
        margin: options.margin,
        font: Font::Helvetica,
        font_size: options.font_size,
        row_advance: options.row_advance,
        ..Default::default()
    };

    let mut document = paginate(units, &layout)?;
    if let Some(title) = &options.title {
        document.set_title(title);
    }
    tracing::debug!(
        rows = rows.len(),
        pages = document.page_count(),
        "imported delimited rows"
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::ContentOp;

    #[test]
    fn test_import_rejects_empty_text() {
        let err = import_delimited("", &TableImportOptions::default()).unwrap_err();
        assert!(matches!(err, OperationError::EmptyInput(_)));

        let err = import_delimited("\n  \n\t\n", &TableImportOptions::default()).unwrap_err();
        assert!(matches!(err, OperationError::EmptyInput(_)));
    }

    #[test]
    fn test_cells_are_quote_stripped_and_trimmed() {
        let doc = import_delimited("\"name\", \"age\"", &TableImportOptions::default()).unwrap();

        let ops = doc.get_page(0).unwrap().content();
        assert_eq!(ops.len(), 2);
        match (&ops[0], &ops[1]) {
            (ContentOp::Text { text: t0, .. }, ContentOp::Text { text: t1, .. }) => {
                assert_eq!(t0, "name");
                assert_eq!(t1, "age");
            }
            other => panic!("expected two text ops, got {other:?}"),
        }
    }

    #[test]
    fn test_cells_truncate_to_budget() {
        let options = TableImportOptions {
            cell_char_budget: 5,
            ..Default::default()
        };
        let doc = import_delimited("abcdefghij", &options).unwrap();

        match &doc.get_page(0).unwrap().content()[0] {
            ContentOp::Text { text, .. } => assert_eq!(text, "abcde"),
            other => panic!("expected text op, got {other:?}"),
        }
    }

    #[test]
    fn test_cell_width_divides_content_width() {
        let options = TableImportOptions {
            page_width: 500.0,
            margin: 50.0,
            ..Default::default()
        };
        let doc = import_delimited("a,b,c,d", &options).unwrap();

        let xs: Vec<f64> = doc
            .get_page(0)
            .unwrap()
            .content()
            .iter()
            .map(|op| match op {
                ContentOp::Text { x, .. } => *x,
                other => panic!("expected text op, got {other:?}"),
            })
            .collect();
        // Content width 400 over 4 cells: columns at 50, 150, 250, 350.
        assert_eq!(xs, vec![50.0, 150.0, 250.0, 350.0]);
    }

    #[test]
    fn test_rows_overflow_onto_new_pages() {
        let options = TableImportOptions {
            page_height: 200.0,
            margin: 20.0,
            row_advance: 22.0,
            ..Default::default()
        };
        // 160pt usable, 22pt per row: 7 rows per page.
        let text: String = (0..10).map(|i| format!("row{i}\n")).collect();
        let doc = import_delimited(&text, &options).unwrap();

        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.get_page(0).unwrap().content().len(), 7);
        assert_eq!(doc.get_page(1).unwrap().content().len(), 3);
    }

    #[test]
    fn test_title_is_drawn_first_and_set_as_metadata() {
        let options = TableImportOptions {
            title: Some("budget".to_string()),
            ..Default::default()
        };
        let doc = import_delimited("a,b", &options).unwrap();

        assert_eq!(doc.title(), Some("budget"));
        match &doc.get_page(0).unwrap().content()[0] {
            ContentOp::Text { text, size, .. } => {
                assert_eq!(text, "budget");
                assert_eq!(*size, 16.0);
            }
            other => panic!("expected title text op, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let doc = import_delimited("a,b\n\n\nc,d\n", &TableImportOptions::default()).unwrap();
        assert_eq!(doc.get_page(0).unwrap().content().len(), 4);
    }
}
