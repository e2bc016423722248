use colored::Colorize;
use serde_json::{Value, json};

use crate::model::Book;

/// JSON shape shared by `list --json` and `show --json`, matching the GraphQL field names
pub fn book_json(book: &Book) -> Value {
    json!({
        "id": book.id,
        "title": book.title,
        "author": book.author,
        "createdAt": book.created_at_iso(),
    })
}

pub fn format_created_at(book: &Book) -> String {
    book.created_at_iso()
        .unwrap_or_else(|| format!("{} ms (out of range)", book.created_at))
}

pub fn print_book_list(books: &[Book]) {
    if books.is_empty() {
        println!("No books found.");
        return;
    }

    for book in books {
        println!(
            "{} {} {} {}",
            book.id.to_string().cyan(),
            book.title.bold(),
            format!("by {}", book.author).dimmed(),
            format_created_at(book).blue()
        );
    }
}
