//! Reading list: the user's curated books, keyed by ISBN
//!
//! Insertion order is preserved for display while a key index keeps ISBNs
//! unique. Both mutations consume the list and return the next value.

use crate::types::{BookRecord, Isbn};
use serde::{Serialize, Serializer};
use std::collections::HashSet;

/// Ordered set of books keyed by ISBN
#[derive(Debug, Clone, Default)]
pub struct ReadingList {
    entries: Vec<BookRecord>,
    keys: HashSet<Isbn>,
}

impl ReadingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `book` unless its ISBN is already present
    pub fn add(mut self, book: BookRecord) -> Self {
        if self.keys.insert(book.isbn.clone()) {
            self.entries.push(book);
        }
        self
    }

    /// Drop the entry with `isbn`, if any
    pub fn remove(mut self, isbn: impl AsRef<str>) -> Self {
        let isbn = isbn.as_ref();
        if self.keys.remove(isbn) {
            self.entries.retain(|book| book.isbn.as_str() != isbn);
        }
        self
    }

    pub fn contains(&self, isbn: impl AsRef<str>) -> bool {
        self.keys.contains(isbn.as_ref())
    }

    pub fn get(&self, isbn: impl AsRef<str>) -> Option<&BookRecord> {
        let isbn = isbn.as_ref();
        if !self.contains(isbn) {
            return None;
        }
        self.entries.iter().find(|book| book.isbn.as_str() == isbn)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Books in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, BookRecord> {
        self.entries.iter()
    }

    pub fn isbns(&self) -> Vec<&Isbn> {
        self.entries.iter().map(|book| &book.isbn).collect()
    }
}

impl PartialEq for ReadingList {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for ReadingList {}

impl Serialize for ReadingList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'a> IntoIterator for &'a ReadingList {
    type Item = &'a BookRecord;
    type IntoIter = std::slice::Iter<'a, BookRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
