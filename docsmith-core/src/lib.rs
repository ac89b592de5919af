//! # docsmith
//!
//! A client-side document transformation engine: merge, split, resize, and
//! page-edit paginated documents, convert images, delimited tables, and raw
//! text into paginated documents, and produce a degraded text extraction.
//!
//! The binary document format is behind the [`codec::DocumentCodec`] seam;
//! the engines only see the in-memory [`Document`] / [`Page`] model. Every
//! operation takes an explicit request value, transforms exactly one
//! document (or produces one from a fixed input set), and either fully
//! succeeds or fails with the input logically unchanged.
//!
//! ## Quick start
//!
//! ```rust
//! use docsmith::operations::{merge_documents, MergeRequest};
//! use docsmith::{Document, Page};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut a = Document::new();
//! a.add_page(Page::a4());
//! let mut b = Document::new();
//! b.add_page(Page::letter());
//!
//! let merged = merge_documents(&MergeRequest::new(vec![a, b]))?;
//! assert_eq!(merged.page_count(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`document`] / [`page`] - the paginated document model
//! - [`codec`] - the load/save/create-empty seam and the reference codec
//! - [`geometry`] / [`layout`] - coordinate conversion, aspect fitting, and
//!   the shared pagination cursor
//! - [`text`] - fonts, measurement, and line wrapping
//! - [`operations`] - the engines: merge, split, edit, resize, imports, and
//!   the extraction stub

pub mod codec;
pub mod document;
pub mod error;
pub mod geometry;
pub mod graphics;
pub mod layout;
pub mod operations;
pub mod page;
pub mod text;

pub use codec::{DocumentCodec, MemoryCodec};
pub use document::{Document, DocumentMetadata};
pub use error::{DocError, Result};
pub use graphics::{Color, ImageData, ImageFormat};
pub use page::{ContentOp, Page};
pub use text::{measure_text, wrap_text, Font};

pub use operations::{
    add_text, delete_pages, extract_text_summary, import_delimited, import_images, import_text,
    merge_documents, resize_document, split_range,
};

/// Current version of docsmith
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_empty_document() {
        let doc = Document::new();
        assert_eq!(doc.page_count(), 0);
    }

    #[test]
    fn test_create_page() {
        let page = Page::new(595.0, 842.0);
        assert_eq!(page.width(), 595.0);
        assert_eq!(page.height(), 842.0);
    }

    #[test]
    fn test_version_info() {
        assert!(!VERSION.is_empty());
    }
}
