use anyhow::Result;

use super::CommandContext;
use super::utils::{book_json, print_book_list};

pub fn handle_list(ctx: &CommandContext, json: bool) -> Result<()> {
    let books = ctx.catalog.all();

    if json {
        let books: Vec<_> = books.iter().map(book_json).collect();
        println!("{}", serde_json::to_string_pretty(&books)?);
    } else {
        print_book_list(books);
    }
    Ok(())
}
