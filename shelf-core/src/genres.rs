//! Genre selector options

use crate::catalog::Catalog;

/// Options for the genre selector.
///
/// Configured genres come first, followed by any catalog genre the
/// configuration does not mention, so every book stays reachable.
pub fn genre_options(configured: &[String], catalog: &Catalog) -> Vec<String> {
    let mut options: Vec<String> = Vec::with_capacity(configured.len());
    let catalog_genres = catalog.genres();

    for genre in configured.iter().map(String::as_str).chain(catalog_genres) {
        if !genre.is_empty() && !options.iter().any(|g| g == genre) {
            options.push(genre.to_string());
        }
    }

    options
}
