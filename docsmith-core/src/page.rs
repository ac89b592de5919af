use crate::error::{DocError, Result};
use crate::graphics::{Color, ImageData};
use crate::text::Font;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A recorded drawing operation on a page.
///
/// The operation list is the page's content handle: opaque to the engines
/// except through [`Page::draw_text`], [`Page::draw_image`] and
/// [`Page::scale_content`]. Coordinates are in the native bottom-left-origin
/// space, in the document's unit (points).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContentOp {
    Text {
        text: String,
        x: f64,
        y: f64,
        font: Font,
        size: f64,
        color: Color,
    },
    Image {
        name: String,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

/// A single page in a document.
///
/// Pages have a size (width and height in points) and drawable, scalable
/// content. A page has no identity of its own; it is identified by its
/// position in the owning [`Document`](crate::Document).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    width: f64,
    height: f64,
    content: Vec<ContentOp>,
    images: HashMap<String, ImageData>,
}

impl Page {
    /// Creates a new blank page with the given width and height in points
    /// (1/72 inch).
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            content: Vec::new(),
            images: HashMap::new(),
        }
    }

    /// Creates a new A4 page (595 x 842 points).
    pub fn a4() -> Self {
        Self::new(595.0, 842.0)
    }

    /// Creates a new US Letter page (612 x 792 points).
    pub fn letter() -> Self {
        Self::new(612.0, 792.0)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns `(width, height)`.
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Draws `text` at `(x, y)` in the native bottom-left-origin space.
    ///
    /// No bounds checking is performed: text positioned outside the visible
    /// page area is recorded as-is.
    pub fn draw_text(
        &mut self,
        text: impl Into<String>,
        x: f64,
        y: f64,
        font: Font,
        size: f64,
        color: Color,
    ) {
        self.content.push(ContentOp::Text {
            text: text.into(),
            x,
            y,
            font,
            size,
            color,
        });
    }

    /// Registers image data under `name` for later drawing.
    pub fn add_image(&mut self, name: impl Into<String>, image: ImageData) {
        self.images.insert(name.into(), image);
    }

    /// Draws a previously registered image at `(x, y)` with the given
    /// rendered size. `(x, y)` is the image's lower-left corner.
    pub fn draw_image(&mut self, name: &str, x: f64, y: f64, width: f64, height: f64) -> Result<()> {
        if !self.images.contains_key(name) {
            return Err(DocError::InvalidReference(format!(
                "image '{name}' not registered on page"
            )));
        }
        self.content.push(ContentOp::Image {
            name: name.to_string(),
            x,
            y,
            width,
            height,
        });
        Ok(())
    }

    /// Scales all recorded content about the page origin.
    ///
    /// Positions scale by the respective axis factor; text size scales by
    /// `sy`. With `sx == sy` the result is a uniform zoom of the rendered
    /// appearance.
    pub fn scale_content(&mut self, sx: f64, sy: f64) {
        for op in &mut self.content {
            match op {
                ContentOp::Text { x, y, size, .. } => {
                    *x *= sx;
                    *y *= sy;
                    *size *= sy;
                }
                ContentOp::Image {
                    x,
                    y,
                    width,
                    height,
                    ..
                } => {
                    *x *= sx;
                    *y *= sy;
                    *width *= sx;
                    *height *= sy;
                }
            }
        }
    }

    /// The recorded content operations, in draw order.
    pub fn content(&self) -> &[ContentOp] {
        &self.content
    }

    /// Registered images, keyed by name.
    pub fn images(&self) -> &HashMap<String, ImageData> {
        &self.images
    }
}
