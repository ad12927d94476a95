//! List command implementation

use super::Context;
use anyhow::Result;
use shelf_core::render::{render_cards, BookSummary, CardAction};
use shelf_core::{apply_filters, FilterCriteria};

/// Print the catalog books matching the given filters
pub fn list(ctx: &Context, genre: Option<&str>, max_pages: Option<&str>, json: bool) -> Result<()> {
    let criteria = FilterCriteria::from_input(genre.unwrap_or_default(), max_pages.unwrap_or_default());
    let books = apply_filters(&ctx.catalog, &criteria);
    tracing::info!(matched = books.len(), total = ctx.catalog.len(), "filtered catalog");

    if json {
        let summaries: Vec<BookSummary> = books.into_iter().map(BookSummary::from).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        print!("{}", render_cards(books, CardAction::Add));
    }

    Ok(())
}
