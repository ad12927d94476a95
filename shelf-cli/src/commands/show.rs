//! Show command implementation

use super::Context;
use anyhow::{Context as _, Result};
use shelf_core::render::{render_card, CardAction};
use shelf_core::ShelfError;

/// Display a single book
pub fn show(ctx: &Context, isbn: &str, json: bool) -> Result<()> {
    let book = ctx
        .catalog
        .get(isbn)
        .ok_or_else(|| ShelfError::UnknownIsbn(isbn.to_string()))
        .context("Cannot show book")?;

    if json {
        println!("{}", serde_json::to_string_pretty(book)?);
    } else {
        print!("{}", render_card(book, CardAction::None));
    }

    Ok(())
}
