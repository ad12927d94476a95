//! Catalog store: the immutable, ordered sequence of book records
//!
//! The catalog is loaded once (from the bundled dataset or a caller-supplied
//! document) and only read afterwards.

use crate::error::LoadError;
use crate::types::{BookRecord, CatalogDocument, Isbn};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Dataset compiled into the crate
const BUNDLED_CATALOG: &str = include_str!("../data/books.json");

/// Load the bundled catalog
pub fn load_catalog() -> crate::Result<Catalog> {
    Ok(Catalog::from_json_str(BUNDLED_CATALOG)?)
}

/// Immutable ordered collection of books, indexed by ISBN
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<BookRecord>,
    index: HashMap<Isbn, usize>,
}

impl Catalog {
    /// Build a catalog from records, rejecting duplicate ISBNs
    pub fn from_books(books: Vec<BookRecord>) -> Result<Self, LoadError> {
        let mut index = HashMap::with_capacity(books.len());
        for (position, book) in books.iter().enumerate() {
            if index.insert(book.isbn.clone(), position).is_some() {
                return Err(LoadError::DuplicateIsbn(book.isbn.to_string()));
            }
        }

        tracing::debug!(books = books.len(), "catalog loaded");
        Ok(Self { books, index })
    }

    /// Build a catalog from a parsed document
    pub fn from_document(document: CatalogDocument) -> Result<Self, LoadError> {
        Self::from_books(document.library.into_iter().map(|entry| entry.book).collect())
    }

    /// Parse a catalog document from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Parse a catalog document from a reader
    pub fn from_reader(reader: impl Read) -> Result<Self, LoadError> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        Self::from_document(document)
    }

    /// Load a catalog document from a file
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// All books in catalog order
    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BookRecord> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Look up a book by ISBN
    pub fn get(&self, isbn: impl AsRef<str>) -> Option<&BookRecord> {
        self.index.get(isbn.as_ref()).map(|&position| &self.books[position])
    }

    /// Distinct genres in first-seen order
    pub fn genres(&self) -> Vec<&str> {
        let mut genres: Vec<&str> = Vec::new();
        for book in &self.books {
            if !genres.contains(&book.genre.as_str()) {
                genres.push(&book.genre);
            }
        }
        genres
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a BookRecord;
    type IntoIter = std::slice::Iter<'a, BookRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}
