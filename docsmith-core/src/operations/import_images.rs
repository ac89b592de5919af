//! Image-set import: one page per image, aspect-fit and centered.

use super::{OperationError, OperationResult};
use crate::document::Document;
use crate::geometry::Size;
use crate::graphics::ImageData;
use crate::layout::{paginate, ContentUnit, LayoutOptions};

/// One source image: a display name and the encoded bytes (PNG or JPEG).
#[derive(Debug, Clone)]
pub struct ImageInput {
    pub name: String,
    pub data: Vec<u8>,
}

impl ImageInput {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// Page shape for the image import pipeline.
#[derive(Debug, Clone)]
pub struct ImageImportOptions {
    pub page_width: f64,
    pub page_height: f64,
    /// Margin kept clear on all four sides.
    pub margin: f64,
}

impl Default for ImageImportOptions {
    fn default() -> Self {
        Self {
            page_width: 595.0,
            page_height: 842.0,
            margin: 28.0,
        }
    }
}

/// Convert a set of images into a paginated document, one image per page.
///
/// Each image is scaled by `min(max_width / w, max_height / h)` to fit
/// within the margins while preserving aspect ratio (images smaller than
/// the content area are scaled up), then centered on its page.
///
/// Fails with [`OperationError::EmptyInput`] when no images are supplied,
/// and with a decode error when any input is not a valid PNG or JPEG.
pub fn import_images(
    inputs: &[ImageInput],
    options: &ImageImportOptions,
) -> OperationResult<Document> {
    if inputs.is_empty() {
        return Err(OperationError::EmptyInput(
            "no images to convert".to_string(),
        ));
    }

    let bounds = Size::new(
        options.page_width - 2.0 * options.margin,
        options.page_height - 2.0 * options.margin,
    );

    let mut units = Vec::with_capacity(inputs.len());
    for (index, input) in inputs.iter().enumerate() {
        let image = ImageData::from_bytes(&input.data).map_err(OperationError::Document)?;
        let fitted =
            Size::new(image.width() as f64, image.height() as f64).fit_within(bounds);

        let name = if input.name.is_empty() {
            format!("image_{index}")
        } else {
            input.name.clone()
        };
        units.push(ContentUnit::Image {
            name,
            image,
            width: fitted.width,
            height: fitted.height,
        });
    }

    let layout = LayoutOptions {
        page_width: options.page_width,
        page_height: options.page_height,
        margin: options.margin,
        ..Default::default()
    };
    let document = paginate(units, &layout)?;
    tracing::debug!(
        images = inputs.len(),
        pages = document.page_count(),
        "imported images"
    );
    Ok(document)
}
