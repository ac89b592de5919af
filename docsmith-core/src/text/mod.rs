//! Fonts and text measurement.

mod metrics;

pub use metrics::{measure_text, wrap_text};

use serde::{Deserialize, Serialize};

/// Built-in fonts available for text drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

impl Font {
    /// PostScript name, as written into the content stream.
    pub fn name(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
        }
    }
}
