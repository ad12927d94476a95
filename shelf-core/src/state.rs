//! Browser state: the single owned container for filters and the reading list
//!
//! Every action produces a new [`BrowserState`] value; the filtered view is
//! recomputed from the catalog on demand and never stored.

use crate::catalog::Catalog;
use crate::error::{Result, ShelfError};
use crate::filter::{apply_filters, parse_max_pages, FilterCriteria};
use crate::reading_list::ReadingList;
use crate::types::{BookRecord, Isbn};

/// A user-triggered state transition
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Genre selector changed; empty text selects all genres
    SetGenre(String),

    /// Max-pages input changed (raw text)
    SetMaxPages(String),

    AddToReadingList(BookRecord),

    RemoveFromReadingList(Isbn),
}

/// Filter criteria plus reading list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowserState {
    pub criteria: FilterCriteria,
    pub reading_list: ReadingList,
}

impl BrowserState {
    /// Produce the state that follows `action`
    pub fn apply(self, action: Action) -> Self {
        let Self {
            criteria,
            reading_list,
        } = self;

        match action {
            Action::SetGenre(genre) => Self {
                criteria: FilterCriteria {
                    genre: (!genre.is_empty()).then_some(genre),
                    ..criteria
                },
                reading_list,
            },
            Action::SetMaxPages(raw) => Self {
                criteria: FilterCriteria {
                    max_pages: parse_max_pages(&raw),
                    ..criteria
                },
                reading_list,
            },
            Action::AddToReadingList(book) => Self {
                criteria,
                reading_list: reading_list.add(book),
            },
            Action::RemoveFromReadingList(isbn) => Self {
                criteria,
                reading_list: reading_list.remove(&isbn),
            },
        }
    }
}

/// Catalog plus the current state
#[derive(Debug, Clone)]
pub struct Browser {
    catalog: Catalog,
    state: BrowserState,
}

impl Browser {
    /// Start browsing with empty filters and an empty reading list
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: BrowserState::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.state.criteria
    }

    pub fn reading_list(&self) -> &ReadingList {
        &self.state.reading_list
    }

    /// Replace the held state with the result of `action`
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(?action, "dispatch");
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(action);
    }

    /// Derived view of the catalog under the current criteria
    pub fn filtered(&self) -> Vec<&BookRecord> {
        apply_filters(&self.catalog, &self.state.criteria)
    }

    /// Add the catalog book with `isbn` to the reading list
    pub fn add_by_isbn(&mut self, isbn: &str) -> Result<()> {
        let book = self
            .catalog
            .get(isbn)
            .cloned()
            .ok_or_else(|| ShelfError::UnknownIsbn(isbn.to_string()))?;
        self.dispatch(Action::AddToReadingList(book));
        Ok(())
    }

    /// Remove `isbn` from the reading list; unknown ISBNs are ignored
    pub fn remove_by_isbn(&mut self, isbn: &str) {
        self.dispatch(Action::RemoveFromReadingList(Isbn::from(isbn)));
    }
}
