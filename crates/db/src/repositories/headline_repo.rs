//! Repository for the `headlines` table.

use sqlx::SqlitePool;

use crate::models::headline::{Headline, NewHeadline};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, source, title, url, scraped_at";

/// Provides append and listing operations for headlines.
pub struct HeadlineRepo;

impl HeadlineRepo {
    /// Append a headline, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &NewHeadline) -> Result<Headline, sqlx::Error> {
        let query = format!(
            "INSERT INTO headlines (source, title, url) \
             VALUES (?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Headline>(&query)
            .bind(&input.source)
            .bind(&input.title)
            .bind(&input.url)
            .fetch_one(pool)
            .await
    }

    /// List the most recently scraped headlines, newest first.
    pub async fn list_recent(pool: &SqlitePool, limit: i64) -> Result<Vec<Headline>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM headlines ORDER BY scraped_at DESC, id DESC LIMIT ?");
        sqlx::query_as::<_, Headline>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
