//! Color and image primitives referenced by page content.

use crate::error::{DocError, Result};
use serde::{Deserialize, Serialize};

/// An RGB color with components in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// Create a color from RGB components, clamped to 0.0..=1.0.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    pub fn gray(level: f64) -> Self {
        Self::rgb(level, level, level)
    }
}

/// Raster image formats accepted by the import pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

/// A decoded raster image: pixel dimensions plus the original encoded bytes.
///
/// The engine never re-encodes pixels; it only needs dimensions for
/// aspect-ratio layout and carries the source bytes through the codec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageData {
    width: u32,
    height: u32,
    format: ImageFormat,
    data: Vec<u8>,
}

impl ImageData {
    /// Decode image dimensions from raw bytes (PNG or JPEG).
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let format = match image::guess_format(data) {
            Ok(image::ImageFormat::Png) => ImageFormat::Png,
            Ok(image::ImageFormat::Jpeg) => ImageFormat::Jpeg,
            Ok(other) => {
                return Err(DocError::InvalidImage(format!(
                    "unsupported image format: {other:?}"
                )))
            }
            Err(e) => return Err(DocError::InvalidImage(e.to_string())),
        };

        let decoded = image::load_from_memory(data)
            .map_err(|e| DocError::InvalidImage(e.to_string()))?;
        use image::GenericImageView;
        let (width, height) = decoded.dimensions();

        Ok(Self {
            width,
            height,
            format,
            data: data.to_vec(),
        })
    }

    /// Construct from known dimensions without decoding. Used by tests and
    /// callers that have already validated the bytes.
    pub fn from_raw(width: u32, height: u32, format: ImageFormat, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            format,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
