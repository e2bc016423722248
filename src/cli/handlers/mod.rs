mod list;
mod query;
mod schema;
mod serve;
mod show;
mod utils;

pub use list::handle_list;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::{ServeParams, handle_serve};
pub use show::handle_show;

use crate::catalog::BookCatalog;
use crate::config::BookshelfConfig;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BookshelfConfig,
    pub catalog: BookCatalog,
}

impl CommandContext {
    pub fn new(config: BookshelfConfig) -> Self {
        Self {
            config,
            catalog: BookCatalog::embedded(),
        }
    }
}
