//! Shared pagination: a layout cursor advanced per content unit, with a new
//! page appended whenever the next unit would overflow the bottom margin.

use crate::document::Document;
use crate::geometry::{from_top_left, Point, Size};
use crate::graphics::{Color, ImageData};
use crate::operations::OperationResult;
use crate::page::Page;
use crate::text::Font;

/// One unit of importable content, consumed uniformly by [`paginate`].
#[derive(Debug, Clone)]
pub enum ContentUnit {
    /// A raster image, already scaled to its rendered size. Always placed
    /// alone on a page, centered both ways.
    Image {
        name: String,
        image: ImageData,
        width: f64,
        height: f64,
    },
    /// One delimited row; cells are pre-truncated by the importer.
    TableRow { cells: Vec<String> },
    /// One wrapped line of text with its own face, size, and cursor advance.
    TextLine {
        text: String,
        font: Font,
        size: f64,
        advance: f64,
    },
}

/// Page shape and drawing defaults for a pagination run.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    pub page_width: f64,
    pub page_height: f64,
    pub margin: f64,
    pub font: Font,
    pub font_size: f64,
    pub color: Color,
    /// Cursor advance per table row.
    pub row_advance: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            page_width: 595.0,
            page_height: 842.0,
            margin: 40.0,
            font: Font::Helvetica,
            font_size: 10.0,
            color: Color::black(),
            row_advance: 22.0,
        }
    }
}

/// Tracks the vertical layout position in top-left-origin coordinates.
#[derive(Debug, Clone)]
pub struct LayoutCursor {
    page_height: f64,
    margin: f64,
    y: f64,
}

impl LayoutCursor {
    pub fn new(page_height: f64, margin: f64) -> Self {
        Self {
            page_height,
            margin,
            y: margin,
        }
    }

    /// Whether a unit of `unit_height` still fits above the bottom margin.
    pub fn fits(&self, unit_height: f64) -> bool {
        self.y + unit_height <= self.page_height - self.margin
    }

    pub fn advance(&mut self, amount: f64) {
        self.y += amount;
    }

    /// Back to the top margin of a fresh page.
    pub fn reset(&mut self) {
        self.y = self.margin;
    }

    /// Current offset from the page top.
    pub fn y(&self) -> f64 {
        self.y
    }
}

/// Lays out `units` onto as many pages as needed and returns the document.
pub fn paginate(units: Vec<ContentUnit>, options: &LayoutOptions) -> OperationResult<Document> {
    let unit_count = units.len();
    let mut pages: Vec<Page> = Vec::new();
    let mut current = Page::new(options.page_width, options.page_height);
    let mut cursor = LayoutCursor::new(options.page_height, options.margin);

    for unit in units {
        match unit {
            ContentUnit::Image {
                name,
                image,
                width,
                height,
            } => {
                if !current.content().is_empty() {
                    pages.push(std::mem::replace(
                        &mut current,
                        Page::new(options.page_width, options.page_height),
                    ));
                }
                let offset = Size::new(width, height)
                    .centered_in(Size::new(options.page_width, options.page_height));
                let Point { x, y: top_y } = offset;
                let native_y = options.page_height - top_y - height;
                current.add_image(name.clone(), image);
                current.draw_image(&name, x, native_y, width, height)?;
                pages.push(std::mem::replace(
                    &mut current,
                    Page::new(options.page_width, options.page_height),
                ));
                cursor.reset();
            }
            ContentUnit::TableRow { cells } => {
                if !cursor.fits(options.row_advance) {
                    pages.push(std::mem::replace(
                        &mut current,
                        Page::new(options.page_width, options.page_height),
                    ));
                    cursor.reset();
                }
                let content_width = options.page_width - 2.0 * options.margin;
                let cell_width = content_width / cells.len().max(1) as f64;
                let native_y = from_top_left(cursor.y(), options.page_height);
                for (index, cell) in cells.iter().enumerate() {
                    current.draw_text(
                        cell,
                        options.margin + index as f64 * cell_width,
                        native_y,
                        options.font,
                        options.font_size,
                        options.color,
                    );
                }
                cursor.advance(options.row_advance);
            }
            ContentUnit::TextLine {
                text,
                font,
                size,
                advance,
            } => {
                if !cursor.fits(advance) {
                    pages.push(std::mem::replace(
                        &mut current,
                        Page::new(options.page_width, options.page_height),
                    ));
                    cursor.reset();
                }
                // Blank lines (paragraph gaps) only move the cursor.
                if !text.is_empty() {
                    let native_y = from_top_left(cursor.y(), options.page_height);
                    current.draw_text(text, options.margin, native_y, font, size, options.color);
                }
                cursor.advance(advance);
            }
        }
    }

    if !current.content().is_empty() || pages.is_empty() {
        pages.push(current);
    }

    let mut document = Document::new();
    for page in pages {
        document.add_page(page);
    }
    tracing::debug!(
        units = unit_count,
        pages = document.page_count(),
        "laid out content units"
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::ImageFormat;
    use crate::page::ContentOp;

    fn text_line(text: &str) -> ContentUnit {
        ContentUnit::TextLine {
            text: text.to_string(),
            font: Font::Helvetica,
            size: 12.0,
            advance: 18.0,
        }
    }

    fn test_image(name: &str, width: f64, height: f64) -> ContentUnit {
        ContentUnit::Image {
            name: name.to_string(),
            image: ImageData::from_raw(100, 100, ImageFormat::Png, vec![0]),
            width,
            height,
        }
    }

    #[test]
    fn test_cursor_overflow_check() {
        let mut cursor = LayoutCursor::new(100.0, 10.0);
        assert!(cursor.fits(80.0));
        assert!(!cursor.fits(81.0));

        cursor.advance(50.0);
        assert!(cursor.fits(30.0));
        assert!(!cursor.fits(31.0));

        cursor.reset();
        assert_eq!(cursor.y(), 10.0);
    }

    #[test]
    fn test_lines_flow_onto_new_page_on_overflow() {
        let options = LayoutOptions {
            page_height: 100.0,
            margin: 10.0,
            ..Default::default()
        };
        // 18pt per line, 80pt of usable height: 4 lines fit, the 5th wraps.
        let units = (0..5).map(|i| text_line(&format!("line {i}"))).collect();
        let doc = paginate(units, &options).unwrap();

        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.get_page(0).unwrap().content().len(), 4);
        assert_eq!(doc.get_page(1).unwrap().content().len(), 1);
    }

    #[test]
    fn test_blank_line_advances_cursor_without_drawing() {
        let options = LayoutOptions::default();
        let units = vec![text_line("one"), text_line(""), text_line("two")];
        let doc = paginate(units, &options).unwrap();

        let ops = doc.get_page(0).unwrap().content();
        assert_eq!(ops.len(), 2);
        match (&ops[0], &ops[1]) {
            (ContentOp::Text { y: y0, .. }, ContentOp::Text { y: y1, .. }) => {
                // The blank line still took its advance: two 18pt steps.
                assert_eq!(y0 - y1, 36.0);
            }
            other => panic!("expected two text ops, got {other:?}"),
        }
    }

    #[test]
    fn test_each_image_gets_its_own_page() {
        let options = LayoutOptions::default();
        let units = vec![
            test_image("a", 500.0, 100.0),
            test_image("b", 500.0, 100.0),
            test_image("c", 500.0, 100.0),
        ];
        let doc = paginate(units, &options).unwrap();

        assert_eq!(doc.page_count(), 3);
        for i in 0..3 {
            assert_eq!(doc.get_page(i).unwrap().content().len(), 1);
        }
    }

    #[test]
    fn test_image_is_centered() {
        let options = LayoutOptions {
            page_width: 600.0,
            page_height: 800.0,
            ..Default::default()
        };
        let doc = paginate(vec![test_image("a", 400.0, 200.0)], &options).unwrap();

        match &doc.get_page(0).unwrap().content()[0] {
            ContentOp::Image { x, y, width, height, .. } => {
                assert_eq!(*x, 100.0); // (600 - 400) / 2
                assert_eq!(*width, 400.0);
                assert_eq!(*height, 200.0);
                // Centered vertically: top offset 300, lower-left y = 800 - 300 - 200.
                assert_eq!(*y, 300.0);
            }
            other => panic!("expected image op, got {other:?}"),
        }
    }

    #[test]
    fn test_table_row_cells_at_column_offsets() {
        let options = LayoutOptions {
            page_width: 300.0,
            page_height: 400.0,
            margin: 50.0,
            ..Default::default()
        };
        let units = vec![ContentUnit::TableRow {
            cells: vec!["a".into(), "b".into()],
        }];
        let doc = paginate(units, &options).unwrap();

        let ops = doc.get_page(0).unwrap().content();
        assert_eq!(ops.len(), 2);
        // Content width 200, two cells of 100 each.
        match (&ops[0], &ops[1]) {
            (ContentOp::Text { x: x0, .. }, ContentOp::Text { x: x1, .. }) => {
                assert_eq!(*x0, 50.0);
                assert_eq!(*x1, 150.0);
            }
            other => panic!("expected two text ops, got {other:?}"),
        }
    }

    #[test]
    fn test_text_after_image_starts_on_fresh_page() {
        let options = LayoutOptions::default();
        let units = vec![test_image("a", 500.0, 100.0), text_line("after")];
        let doc = paginate(units, &options).unwrap();

        assert_eq!(doc.page_count(), 2);
        assert!(matches!(
            doc.get_page(1).unwrap().content()[0],
            ContentOp::Text { .. }
        ));
    }
}
