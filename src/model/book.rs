use serde::Serialize;

use super::timestamp;

/// A catalog record. Every instance lives in static memory for the whole process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Book {
    pub id: i32,
    pub title: &'static str,
    pub author: &'static str,

    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}

impl Book {
    pub const fn new(id: i32, title: &'static str, author: &'static str, created_at: i64) -> Self {
        Self {
            id,
            title,
            author,
            created_at,
        }
    }

    /// `created_at` rendered as an ISO-8601 UTC timestamp.
    ///
    /// Returns `None` only when the value falls outside the representable calendar.
    pub fn created_at_iso(&self) -> Option<String> {
        timestamp::to_iso8601(self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_at_iso_uses_milliseconds() {
        let book = Book::new(1, "The Awakening", "Kate Chopin", 458295425);
        assert_eq!(
            book.created_at_iso().as_deref(),
            Some("1970-01-06T07:18:15.425Z")
        );
    }

    #[test]
    fn test_serializes_snake_case_fields() {
        let book = Book::new(2, "City of Glass", "Paul Auster", 650276225);
        let json = serde_json::to_value(book).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["created_at"], 650276225);
    }
}
