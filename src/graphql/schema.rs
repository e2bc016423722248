use async_graphql::{EmptyMutation, EmptySubscription, Object, Schema};

use crate::catalog::BookCatalog;

use super::types::Book;

pub type BookshelfSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Schema over the embedded catalog.
pub fn build_schema() -> BookshelfSchema {
    build_schema_with(BookCatalog::embedded())
}

pub fn build_schema_with(catalog: BookCatalog) -> BookshelfSchema {
    Schema::build(QueryRoot { catalog }, EmptyMutation, EmptySubscription).finish()
}

pub struct QueryRoot {
    catalog: BookCatalog,
}

#[Object(name = "Query")]
impl QueryRoot {
    /// All books, in catalog order
    async fn books(&self) -> Option<Vec<Option<Book>>> {
        Some(self.catalog.all().iter().map(|b| Some(Book::from(b))).collect())
    }

    /// A single book by id; null when the id is omitted or unknown
    async fn book(&self, id: Option<i32>) -> Option<Book> {
        self.catalog.find(id?).map(Book::from)
    }
}
