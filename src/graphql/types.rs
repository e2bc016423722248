use async_graphql::Object;
use tracing::warn;

use crate::model;

/// GraphQL view over a catalog record. Fields are nullable to match the published SDL.
#[derive(Clone, Copy)]
pub struct Book(&'static model::Book);

impl From<&'static model::Book> for Book {
    fn from(book: &'static model::Book) -> Self {
        Self(book)
    }
}

#[Object]
impl Book {
    async fn id(&self) -> Option<i32> {
        Some(self.0.id)
    }

    async fn title(&self) -> Option<&'static str> {
        Some(self.0.title)
    }

    async fn author(&self) -> Option<&'static str> {
        Some(self.0.author)
    }

    /// Creation time as an ISO-8601 UTC timestamp
    async fn created_at(&self) -> Option<String> {
        let formatted = self.0.created_at_iso();
        if formatted.is_none() {
            warn!(
                id = self.0.id,
                created_at = self.0.created_at,
                "created_at is outside the representable calendar range"
            );
        }
        formatted
    }
}
