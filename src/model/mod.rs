//! Data models for bookshelf.
//!
//! - [`Book`]: The single catalog entity
//! - [`timestamp`]: Epoch-millisecond to ISO-8601 conversion used for `createdAt`

mod book;
pub mod timestamp;

pub use book::Book;
