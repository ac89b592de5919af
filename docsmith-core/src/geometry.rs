//! Coordinate conversion and fitting math used by the engines.
//!
//! Pages use a bottom-left origin with y growing upward; callers (and the
//! import pipelines) work in a top-left origin with y growing downward.

/// A point in 2D space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Origin point (0, 0)
    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// A size in 2D space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Scale both dimensions by the same factor.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }

    /// Fit this size within `bounds` preserving aspect ratio.
    ///
    /// The ratio is `min(bounds.w / w, bounds.h / h)`; a size smaller than
    /// the bounds is scaled *up*, matching the layout behavior of the image
    /// import pipeline.
    pub fn fit_within(&self, bounds: Size) -> Size {
        let ratio = (bounds.width / self.width).min(bounds.height / self.height);
        self.scaled(ratio)
    }

    /// Offset that centers this size inside `bounds` (top-left origin).
    pub fn centered_in(&self, bounds: Size) -> Point {
        Point::new(
            (bounds.width - self.width) / 2.0,
            (bounds.height - self.height) / 2.0,
        )
    }
}

/// Convert a top-left-origin y coordinate to the native bottom-left origin.
pub fn from_top_left(y: f64, page_height: f64) -> f64 {
    page_height - y
}
