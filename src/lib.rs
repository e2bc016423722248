//! # Bookshelf - a GraphQL server over a fixed book catalog
//!
//! Bookshelf serves four embedded book records through a two-field GraphQL
//! query root: `books` lists the whole catalog and `book(id)` looks one up.
//! Creation times are stored as epoch milliseconds and exposed as ISO-8601
//! strings.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve GraphQL (and GraphiQL) on http://127.0.0.1:3334/
//! bookshelf serve
//!
//! # Run a query without starting a server
//! bookshelf query '{ books { id title createdAt } }'
//!
//! # Print the schema
//! bookshelf schema
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: The embedded, immutable book catalog
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models and timestamp formatting

pub mod catalog;

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles `.bookshelf.toml` discovery and server/logging settings.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BookshelfError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP transport.
pub mod graphql;

pub mod logging;

/// Data models for bookshelf.
pub mod model;
