//! Browse command: an interactive session over stdin
//!
//! Each line is one user event. Filter changes and reading list edits are
//! dispatched to the [`Browser`], and the affected view is re-rendered.

use super::Context;
use anyhow::Result;
use shelf_core::render::{render_cards, CardAction};
use shelf_core::{Action, Browser};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  genre [NAME]    filter by genre (no name shows all genres)
  pages [N]       filter by maximum pages (no value removes the limit)
  add <ISBN>      add a catalog book to the reading list
  remove <ISBN>   remove a book from the reading list
  list            show the filtered catalog
  reading         show the reading list
  genres          show the available genres
  help            show this help
  quit            end the session
";

/// A parsed session line
#[derive(Debug, PartialEq)]
enum SessionCommand<'a> {
    Genre(&'a str),
    Pages(&'a str),
    Add(&'a str),
    Remove(&'a str),
    List,
    Reading,
    Genres,
    Help,
    Quit,
    Empty,
    Unknown(&'a str),
}

impl<'a> SessionCommand<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "" => Self::Empty,
            "genre" => Self::Genre(rest),
            "pages" => Self::Pages(rest),
            "add" if !rest.is_empty() => Self::Add(rest),
            "remove" if !rest.is_empty() => Self::Remove(rest),
            "list" => Self::List,
            "reading" => Self::Reading,
            "genres" => Self::Genres,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => Self::Unknown(line),
        }
    }
}

/// Run an interactive session on stdin/stdout
pub fn browse(ctx: Context) -> Result<()> {
    let genres = ctx.genre_options();
    let mut browser = Browser::new(ctx.catalog);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut browser, &genres, stdin.lock(), stdout.lock())
}

fn run_session(
    browser: &mut Browser,
    genres: &[String],
    mut input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    writeln!(out, "{} books loaded. Type `help` for commands.", browser.catalog().len())?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        // Invalid UTF-8 becomes replacement characters and parses as an unknown command
        let line = String::from_utf8_lossy(&buf);
        match SessionCommand::parse(&line) {
            SessionCommand::Genre(genre) => {
                if !genre.is_empty() && !genres.iter().any(|g| g == genre) {
                    tracing::warn!(genre, "genre not offered by the selector");
                }
                browser.dispatch(Action::SetGenre(genre.to_string()));
                write_catalog(browser, &mut out)?;
            }
            SessionCommand::Pages(raw) => {
                browser.dispatch(Action::SetMaxPages(raw.to_string()));
                if !raw.is_empty() && browser.criteria().max_pages.is_none() {
                    writeln!(out, "Ignoring non-numeric page limit: {}", raw)?;
                }
                write_catalog(browser, &mut out)?;
            }
            SessionCommand::Add(isbn) => match browser.add_by_isbn(isbn) {
                Ok(()) => write_reading_list(browser, &mut out)?,
                Err(e) => writeln!(out, "{}", e)?,
            },
            SessionCommand::Remove(isbn) => {
                browser.remove_by_isbn(isbn);
                write_reading_list(browser, &mut out)?;
            }
            SessionCommand::List => write_catalog(browser, &mut out)?,
            SessionCommand::Reading => write_reading_list(browser, &mut out)?,
            SessionCommand::Genres => {
                writeln!(out, "All")?;
                for genre in genres {
                    writeln!(out, "{}", genre)?;
                }
            }
            SessionCommand::Help => write!(out, "{}", HELP)?,
            SessionCommand::Quit => break,
            SessionCommand::Empty => {}
            SessionCommand::Unknown(line) => {
                writeln!(out, "Unknown command: {} (type `help`)", line)?;
            }
        }
        out.flush()?;
    }

    tracing::debug!(reading = browser.reading_list().len(), "session ended");
    Ok(())
}

fn write_catalog(browser: &Browser, out: &mut impl Write) -> io::Result<()> {
    let books = browser.filtered();
    let criteria = browser.criteria();
    let genre = criteria.genre.as_deref().unwrap_or("All");
    let pages = criteria
        .max_pages
        .map_or_else(|| "any".to_string(), |max| max.to_string());

    writeln!(
        out,
        "== Catalog: {} of {} books (genre: {}, max pages: {}) ==",
        books.len(),
        browser.catalog().len(),
        genre,
        pages
    )?;
    write!(out, "{}", render_cards(books, CardAction::Add))
}

fn write_reading_list(browser: &Browser, out: &mut impl Write) -> io::Result<()> {
    let list = browser.reading_list();
    writeln!(out, "== Reading List: {} books ==", list.len())?;
    write!(out, "{}", render_cards(list, CardAction::Remove))
}
