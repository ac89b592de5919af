use crate::codec::{DocumentCodec, MemoryCodec};
use crate::error::{DocError, Result};
use crate::page::Page;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An ordered sequence of pages representing one paginated file.
///
/// Page order is significant and load-bearing for every operation: a page is
/// identified only by its position (1-indexed for callers, 0-indexed here).
/// A `Document` is owned by exactly one operation at a time; it is created,
/// transformed, serialized and discarded within a single invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pages: Vec<Page>,
    metadata: DocumentMetadata,
}

/// Document information fields carried through codec round-trips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
    pub modification_date: Option<DateTime<Utc>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            metadata: DocumentMetadata {
                creation_date: Some(Utc::now()),
                ..Default::default()
            },
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.metadata.title = Some(title.into());
    }

    pub fn title(&self) -> Option<&str> {
        self.metadata.title.as_deref()
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.metadata.author = Some(author.into());
    }

    pub fn author(&self) -> Option<&str> {
        self.metadata.author.as_deref()
    }

    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    /// Stamps the modification date with the current time.
    pub fn update_modification_date(&mut self) {
        self.metadata.modification_date = Some(Utc::now());
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn get_page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn get_page_mut(&mut self, index: usize) -> Option<&mut Page> {
        self.pages.get_mut(index)
    }

    /// Appends a page at the end of the sequence.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Removes and returns the page at `index`, shifting subsequent pages
    /// down by one position.
    pub fn remove_page(&mut self, index: usize) -> Result<Page> {
        if index >= self.pages.len() {
            return Err(DocError::PageOutOfBounds(index, self.pages.len()));
        }
        Ok(self.pages.remove(index))
    }

    /// Copies the pages at `indices` out of `source` as independent pages.
    ///
    /// The source is not modified; mutating the returned pages cannot affect
    /// it.
    pub fn copy_pages(source: &Document, indices: &[usize]) -> Result<Vec<Page>> {
        let mut pages = Vec::with_capacity(indices.len());
        for &index in indices {
            let page = source
                .get_page(index)
                .ok_or(DocError::PageOutOfBounds(index, source.page_count()))?;
            pages.push(page.clone());
        }
        Ok(pages)
    }

    /// Serializes the document with the default codec into `buffer`.
    pub fn write(&mut self, buffer: &mut Vec<u8>) -> Result<()> {
        self.update_modification_date();
        let bytes = MemoryCodec.save(self)?;
        buffer.extend_from_slice(&bytes);
        Ok(())
    }

    /// Serializes the document with the default codec to a file.
    pub fn save(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let mut buffer = Vec::new();
        self.write(&mut buffer)?;
        std::fs::write(path, buffer)?;
        Ok(())
    }

    /// Decodes a document from bytes with the default codec.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        MemoryCodec.load(bytes)
    }
}
