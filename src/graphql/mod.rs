//! GraphQL schema, resolvers and HTTP transport for bookshelf.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL on GET /)
//! bookshelf serve --port 3334
//!
//! # Execute a query from the CLI
//! bookshelf query '{ book(id: 1) { title createdAt } }'
//! ```
//!
//! ## Schema
//!
//! ```graphql
//! type Book { id: Int, title: String, author: String, createdAt: String }
//! type Query { books: [Book], book(id: Int): Book }
//! ```

mod schema;
mod server;
mod types;

pub use schema::{BookshelfSchema, QueryRoot, build_schema, build_schema_with};
pub use server::{router, run_server};
pub use types::Book;
