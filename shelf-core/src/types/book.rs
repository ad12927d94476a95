//! The BookRecord type - one catalog entry

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Book identifier. Compared by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Isbn(String);

impl Isbn {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Isbn {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Isbn {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Isbn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Isbn {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Book author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name
    pub name: String,

    /// Other titles by the same author
    #[serde(rename = "otherBooks", default, skip_serializing_if = "Vec::is_empty")]
    pub other_books: Vec<String>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            other_books: Vec::new(),
        }
    }
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Book title
    pub title: String,

    /// Author
    pub author: Author,

    /// Free-form genre label, matched exactly
    pub genre: String,

    /// Page count
    pub pages: u32,

    /// Publication year
    pub year: i32,

    /// Unique identifier
    #[serde(rename = "ISBN")]
    pub isbn: Isbn,

    /// Short description
    pub synopsis: String,

    /// Cover image reference
    pub cover: String,
}

impl BookRecord {
    /// Create a record with the identifying fields; the rest start empty
    pub fn new(
        isbn: impl Into<Isbn>,
        title: impl Into<String>,
        genre: impl Into<String>,
        pages: u32,
    ) -> Self {
        Self {
            title: title.into(),
            author: Author::new(""),
            genre: genre.into(),
            pages,
            year: 0,
            isbn: isbn.into(),
            synopsis: String::new(),
            cover: String::new(),
        }
    }

    /// Set the author
    pub fn with_author(mut self, name: impl Into<String>) -> Self {
        self.author = Author::new(name);
        self
    }

    /// Set the publication year
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Set the synopsis
    pub fn with_synopsis(mut self, synopsis: impl Into<String>) -> Self {
        self.synopsis = synopsis.into();
        self
    }

    /// Get the author's name
    pub fn author_name(&self) -> &str {
        &self.author.name
    }
}
