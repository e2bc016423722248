use anyhow::Result;
use colored::Colorize;

use crate::model::Book;

use super::CommandContext;
use super::utils::{book_json, format_created_at};

pub fn handle_show(ctx: &CommandContext, id: i32, json: bool) -> Result<()> {
    let book = ctx.catalog.get(id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&book_json(book))?);
    } else {
        print_book(book);
    }
    Ok(())
}

fn print_book(book: &Book) {
    println!("{} {}", book.id.to_string().cyan().bold(), book.title.bold());
    println!("Author:   {}", book.author);
    println!("Created:  {}", format_created_at(book).blue());
}
