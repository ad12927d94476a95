//! Core data types for the book catalog

mod book;
mod document;

pub use book::{Author, BookRecord, Isbn};
pub use document::{CatalogDocument, LibraryEntry};
