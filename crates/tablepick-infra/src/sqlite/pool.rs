//! Database pool with split reader/writer connections in WAL mode.
//!
//! SQLite allows only one writer at a time. This module provides a `DatabasePool`
//! with a multi-connection reader pool for concurrent scans and a single-connection
//! writer pool for serialized history writes and loads.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Split read/write pool for SQLite with WAL mode.
///
/// - `reader`: Multi-connection pool (up to 8) for concurrent SELECT queries.
/// - `writer`: Single-connection pool for serialized INSERT/DELETE.
#[derive(Clone)]
pub struct DatabasePool {
    pub reader: SqlitePool,
    pub writer: SqlitePool,
}

impl DatabasePool {
    /// Create a new DatabasePool with split reader/writer connections.
    ///
    /// Collections are created by the repositories' `init` constructors, so
    /// the pool itself carries no schema.
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let base_opts = SqliteConnectOptions::from_str(database_url)?
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(5))
            .create_if_missing(true);

        let read_opts = base_opts.clone().read_only(true);
        let write_opts = base_opts;

        // Writer first so the file and WAL exist before read-only connections open
        let writer = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(write_opts)
            .await?;

        let reader = SqlitePoolOptions::new()
            .max_connections(8)
            .connect_with(read_opts)
            .await?;

        Ok(Self { reader, writer })
    }
}

/// Build the SQLite URL for a database file inside the data directory.
pub fn database_url(data_dir: &std::path::Path, database_file: &str) -> String {
    format!("sqlite://{}?mode=rwc", data_dir.join(database_file).display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pool_wal_mode() {
        let dir = tempfile::tempdir().unwrap();
        let url = database_url(dir.path(), "test_wal.db");

        let pool = DatabasePool::new(&url).await.unwrap();

        let result: (String,) = sqlx::query_as("PRAGMA journal_mode")
            .fetch_one(&pool.writer)
            .await
            .unwrap();

        assert_eq!(result.0.to_lowercase(), "wal");
    }

    #[tokio::test]
    async fn test_reader_is_read_only() {
        let dir = tempfile::tempdir().unwrap();
        let url = database_url(dir.path(), "test_ro.db");

        let pool = DatabasePool::new(&url).await.unwrap();

        let result = sqlx::query("CREATE TABLE nope (id INTEGER)")
            .execute(&pool.reader)
            .await;
        assert!(result.is_err(), "reader pool must reject writes");
    }

    #[test]
    fn test_database_url() {
        let url = database_url(std::path::Path::new("/tmp/tp"), "tablepick.db");
        assert_eq!(url, "sqlite:///tmp/tp/tablepick.db?mode=rwc");
    }
}
