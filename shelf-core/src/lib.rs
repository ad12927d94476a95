//! Shelf Core Library
//!
//! This crate provides the catalog types, filtering, and reading list logic for
//! the Shelf catalog browser. The catalog is loaded once and never mutated; all
//! user-facing state lives in a single [`BrowserState`] value that is replaced
//! on every action.

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod genres;
pub mod reading_list;
pub mod render;
pub mod state;
pub mod types;

pub use catalog::{load_catalog, Catalog};
pub use config::ShelfConfig;
pub use error::{ConfigError, LoadError, Result, ShelfError};
pub use filter::{apply_filters, parse_max_pages, FilterCriteria};
pub use genres::genre_options;
pub use reading_list::ReadingList;
pub use state::{Action, Browser, BrowserState};
pub use types::{Author, BookRecord, CatalogDocument, Isbn, LibraryEntry};
