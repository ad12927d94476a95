//! Genres command implementation

use super::Context;
use anyhow::Result;

/// Print the genre selector options.
///
/// Text output starts with the `All` choice; JSON lists only genre names,
/// since `All` is the absence of a genre rather than one of them.
pub fn genres(ctx: &Context, json: bool) -> Result<()> {
    let options = ctx.genre_options();

    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
    } else {
        println!("All");
        for genre in options {
            println!("{}", genre);
        }
    }

    Ok(())
}
