//! Plain-text book cards and JSON projections

use crate::types::BookRecord;
use serde::Serialize;

/// Affordance shown at the bottom of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    /// Catalog card
    Add,
    /// Reading list card
    Remove,
    /// Detail view; no affordance
    None,
}

impl CardAction {
    fn label(self) -> Option<&'static str> {
        match self {
            CardAction::Add => Some("Add to Reading List"),
            CardAction::Remove => Some("Remove from Reading List"),
            CardAction::None => None,
        }
    }
}

/// Render one book as a text card
pub fn render_card(book: &BookRecord, action: CardAction) -> String {
    let mut lines = vec![
        book.title.clone(),
        format!("  Cover:    {}", book.cover),
        format!("  Author:   {}", book.author_name()),
        format!("  Genre:    {}", book.genre),
        format!("  Pages:    {}", book.pages),
        format!("  Year:     {}", book.year),
        format!("  ISBN:     {}", book.isbn),
    ];
    if !book.synopsis.is_empty() {
        lines.push(format!("  {}", book.synopsis));
    }
    if let Some(label) = action.label() {
        lines.push(format!("  [{}: {}]", label, book.isbn));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Render a sequence of cards separated by blank lines
pub fn render_cards<'a>(
    books: impl IntoIterator<Item = &'a BookRecord>,
    action: CardAction,
) -> String {
    let cards: Vec<String> = books
        .into_iter()
        .map(|book| render_card(book, action))
        .collect();

    if cards.is_empty() {
        "(no books)\n".to_string()
    } else {
        cards.join("\n")
    }
}

/// Compact projection of a book for listings
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookSummary {
    #[serde(rename = "ISBN")]
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub pages: u32,
    pub year: i32,
}

impl From<&BookRecord> for BookSummary {
    fn from(book: &BookRecord) -> Self {
        Self {
            isbn: book.isbn.to_string(),
            title: book.title.clone(),
            author: book.author_name().to_string(),
            genre: book.genre.clone(),
            pages: book.pages,
            year: book.year,
        }
    }
}
