//! The codec seam: the engines treat the binary document format as an
//! external capability with exactly three entry points.

use crate::document::Document;
use crate::error::{DocError, Result};

/// Decodes and encodes the document container format.
///
/// Every engine operation starts with [`load`](DocumentCodec::load) (or
/// [`create_empty`](DocumentCodec::create_empty)) and ends with
/// [`save`](DocumentCodec::save); the transformation logic in between never
/// touches bytes.
pub trait DocumentCodec {
    /// Decode a document from raw bytes.
    fn load(&self, bytes: &[u8]) -> Result<Document>;

    /// Encode a document to bytes.
    fn save(&self, document: &Document) -> Result<Vec<u8>>;

    /// Create a new empty document.
    fn create_empty(&self) -> Document {
        Document::new()
    }
}

/// Magic prefix identifying the reference container format.
const MAGIC: &[u8] = b"DSMC1\n";

/// Reference codec backing the CLI and the test suite.
///
/// Serializes the in-memory model as JSON behind a short magic header, so
/// that arbitrary input bytes fail decoding deterministically.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryCodec;

impl DocumentCodec for MemoryCodec {
    fn load(&self, bytes: &[u8]) -> Result<Document> {
        let payload = bytes
            .strip_prefix(MAGIC)
            .ok_or_else(|| DocError::Decode("missing container header".to_string()))?;
        serde_json::from_slice(payload).map_err(|e| DocError::Decode(e.to_string()))
    }

    fn save(&self, document: &Document) -> Result<Vec<u8>> {
        let mut bytes = MAGIC.to_vec();
        let payload =
            serde_json::to_vec(document).map_err(|e| DocError::Encode(e.to_string()))?;
        bytes.extend_from_slice(&payload);
        Ok(bytes)
    }
}
