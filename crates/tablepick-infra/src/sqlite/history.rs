//! SQLite request history collection.
//!
//! Implements `HistoryRepository` from `tablepick-core`. One row per request,
//! keyed by request id; parameters and response are stored as JSON text.

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::Row;
use tablepick_core::repository::history::HistoryRepository;
use tablepick_types::error::RepositoryError;
use tablepick_types::history::HistoryRecord;
use tablepick_types::query::QueryParameters;
use tablepick_types::restaurant::RestaurantRecord;

use super::pool::DatabasePool;
use super::validate_identifier;

/// SQLite-backed request history.
pub struct SqliteHistoryRepository {
    pool: DatabasePool,
    table: String,
}

impl SqliteHistoryRepository {
    /// Open the collection `table`, creating it if needed.
    pub async fn init(pool: DatabasePool, table: &str) -> Result<Self, RepositoryError> {
        let table = validate_identifier(table)?.to_string();

        sqlx::query(&format!(
            r#"CREATE TABLE IF NOT EXISTS "{table}" (
                request_id TEXT PRIMARY KEY NOT NULL,
                timestamp TEXT NOT NULL,
                parameters TEXT NOT NULL,
                response TEXT NOT NULL
            )"#
        ))
        .execute(&pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        tracing::debug!(table = %table, "History collection ready");

        Ok(Self { pool, table })
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

// ---------------------------------------------------------------------------
// Private Row types
// ---------------------------------------------------------------------------

struct HistoryRow {
    request_id: String,
    timestamp: String,
    parameters: String,
    response: String,
}

impl HistoryRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            request_id: row.try_get("request_id")?,
            timestamp: row.try_get("timestamp")?,
            parameters: row.try_get("parameters")?,
            response: row.try_get("response")?,
        })
    }

    fn into_record(self) -> Result<HistoryRecord, RepositoryError> {
        let timestamp = parse_datetime(&self.timestamp)?;
        let parameters: QueryParameters = serde_json::from_str(&self.parameters)
            .map_err(|e| RepositoryError::InvalidRecord(format!("invalid parameters: {e}")))?;
        let response = decode_response(&self.response)?;

        Ok(HistoryRecord {
            request_id: self.request_id,
            timestamp,
            parameters,
            response,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::InvalidRecord(format!("invalid datetime: {e}")))
}

/// Fixed-width RFC 3339 so that text ordering equals time ordering.
fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn encode_response(response: &Option<RestaurantRecord>) -> Result<String, RepositoryError> {
    match response {
        Some(record) => serde_json::to_string(record)
            .map_err(|e| RepositoryError::InvalidRecord(e.to_string())),
        None => Ok("{}".to_string()),
    }
}

fn decode_response(s: &str) -> Result<Option<RestaurantRecord>, RepositoryError> {
    let value: serde_json::Value = serde_json::from_str(s)
        .map_err(|e| RepositoryError::InvalidRecord(format!("invalid response: {e}")))?;

    match &value {
        serde_json::Value::Object(map) if map.is_empty() => Ok(None),
        _ => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| RepositoryError::InvalidRecord(format!("invalid response: {e}"))),
    }
}

// ---------------------------------------------------------------------------
// HistoryRepository implementation
// ---------------------------------------------------------------------------

impl HistoryRepository for SqliteHistoryRepository {
    async fn put(&self, record: &HistoryRecord) -> Result<(), RepositoryError> {
        let parameters = serde_json::to_string(&record.parameters)
            .map_err(|e| RepositoryError::InvalidRecord(e.to_string()))?;
        let response = encode_response(&record.response)?;

        // Put semantics: a repeated request id replaces the earlier item.
        sqlx::query(&format!(
            r#"INSERT INTO "{}" (request_id, timestamp, parameters, response)
               VALUES (?, ?, ?, ?)
               ON CONFLICT (request_id) DO UPDATE SET
                   timestamp = excluded.timestamp,
                   parameters = excluded.parameters,
                   response = excluded.response"#,
            self.table
        ))
        .bind(&record.request_id)
        .bind(format_datetime(&record.timestamp))
        .bind(parameters)
        .bind(response)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn recent(&self, limit: i64) -> Result<Vec<HistoryRecord>, RepositoryError> {
        let rows = sqlx::query(&format!(
            r#"SELECT * FROM "{}" ORDER BY timestamp DESC, rowid DESC LIMIT ?"#,
            self.table
        ))
        // SQLite treats a negative LIMIT as unbounded
        .bind(limit.max(0))
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            let history_row =
                HistoryRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            records.push(history_row.into_record()?);
        }

        Ok(records)
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let row = sqlx::query(&format!(r#"SELECT COUNT(*) as cnt FROM "{}""#, self.table))
            .fetch_one(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        row.try_get("cnt")
            .map_err(|e| RepositoryError::Query(e.to_string()))
    }
}
