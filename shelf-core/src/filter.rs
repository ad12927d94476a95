//! Filter engine: the subset of the catalog matching the current criteria

use crate::catalog::Catalog;
use crate::types::BookRecord;
use serde::{Deserialize, Serialize};

/// Parse the raw max-pages control text into a bound.
///
/// Empty or unparseable input yields `None`, which imposes no constraint.
/// Decimal input is floored since page counts are integers.
pub fn parse_max_pages(raw: &str) -> Option<i64> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(value) = text.parse::<i64>() {
        return Some(value);
    }

    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value.floor() as i64),
        _ => {
            tracing::debug!(input = raw, "ignoring non-numeric max pages");
            None
        }
    }
}

/// Current genre and page constraints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Exact genre to match; `None` matches all
    pub genre: Option<String>,

    /// Inclusive upper bound on pages; `None` means no bound
    pub max_pages: Option<i64>,
}

impl FilterCriteria {
    /// Build criteria from raw control values
    pub fn from_input(genre: &str, max_pages: &str) -> Self {
        Self {
            genre: (!genre.is_empty()).then(|| genre.to_string()),
            max_pages: parse_max_pages(max_pages),
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_max_pages(mut self, max_pages: i64) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        self.genre.is_none() && self.max_pages.is_none()
    }

    /// Whether a single book satisfies both constraints
    pub fn matches(&self, book: &BookRecord) -> bool {
        let genre_ok = self.genre.as_deref().map_or(true, |g| book.genre == g);
        let pages_ok = self
            .max_pages
            .map_or(true, |max| i64::from(book.pages) <= max);
        genre_ok && pages_ok
    }
}

/// Books matching `criteria`, in catalog order
pub fn apply_filters<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> Vec<&'a BookRecord> {
    catalog.iter().filter(|book| criteria.matches(book)).collect()
}
