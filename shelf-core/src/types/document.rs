//! Shape of the catalog input document

use super::BookRecord;
use serde::{Deserialize, Serialize};

/// Top-level catalog document: `{ "library": [ { "book": { ... } } ] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogDocument {
    pub library: Vec<LibraryEntry>,
}

/// A single element of the `library` sequence
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LibraryEntry {
    pub book: BookRecord,
}

impl CatalogDocument {
    /// Build a document from records in order
    pub fn from_books(books: impl IntoIterator<Item = BookRecord>) -> Self {
        Self {
            library: books
                .into_iter()
                .map(|book| LibraryEntry { book })
                .collect(),
        }
    }
}
