//! SQLite restaurant collection.
//!
//! Implements `RestaurantRepository` from `tablepick-core`. Each record is one
//! JSON document row; predicate conditions compile to
//! `json_extract(document, '$.<attribute>') = ?`. Native order is insertion
//! order.

use sqlx::Row;
use tablepick_core::repository::restaurant::RestaurantRepository;
use tablepick_types::error::RepositoryError;
use tablepick_types::predicate::{AttributeValue, Predicate};
use tablepick_types::restaurant::RestaurantRecord;

use super::pool::DatabasePool;
use super::validate_identifier;

/// SQLite-backed implementation of `RestaurantRepository`.
pub struct SqliteRestaurantRepository {
    pool: DatabasePool,
    table: String,
}

impl SqliteRestaurantRepository {
    /// Open the collection `table`, creating it (and its filter indexes) if needed.
    pub async fn init(pool: DatabasePool, table: &str) -> Result<Self, RepositoryError> {
        let table = validate_identifier(table)?.to_string();

        sqlx::query(&format!(
            r#"CREATE TABLE IF NOT EXISTS "{table}" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                document TEXT NOT NULL CHECK (json_valid(document))
            )"#
        ))
        .execute(&pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        for attribute in ["style", "vegetarian"] {
            sqlx::query(&format!(
                r#"CREATE INDEX IF NOT EXISTS "{table}_{attribute}_idx"
                   ON "{table}" (json_extract(document, '$.{attribute}'))"#
            ))
            .execute(&pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;
        }

        tracing::debug!(table = %table, "Restaurant collection ready");

        Ok(Self { pool, table })
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Compile a predicate into a SELECT over the collection.
fn scan_sql(table: &str, predicate: &Predicate) -> String {
    let mut sql = format!(r#"SELECT document FROM "{table}""#);

    if !predicate.is_empty() {
        let clauses: Vec<String> = predicate
            .conditions()
            .iter()
            .map(|c| format!("json_extract(document, '$.{}') = ?", c.attribute.as_str()))
            .collect();
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }

    sql.push_str(" ORDER BY id");
    sql
}

fn decode_document(document: &str) -> Result<RestaurantRecord, RepositoryError> {
    serde_json::from_str(document).map_err(|e| RepositoryError::InvalidRecord(e.to_string()))
}

// ---------------------------------------------------------------------------
// RestaurantRepository implementation
// ---------------------------------------------------------------------------

impl RestaurantRepository for SqliteRestaurantRepository {
    async fn scan(&self, predicate: &Predicate) -> Result<Vec<RestaurantRecord>, RepositoryError> {
        let sql = scan_sql(&self.table, predicate);

        let mut query = sqlx::query(&sql);
        for condition in predicate.conditions() {
            query = match &condition.value {
                AttributeValue::Text(s) => query.bind(s.as_str()),
                AttributeValue::Bool(b) => query.bind(*b),
            };
        }

        let rows = query
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            let document: String = row
                .try_get("document")
                .map_err(|e| RepositoryError::Query(e.to_string()))?;
            records.push(decode_document(&document)?);
        }

        Ok(records)
    }

    async fn batch_put(&self, records: &[RestaurantRecord]) -> Result<usize, RepositoryError> {
        let sql = format!(r#"INSERT INTO "{}" (document) VALUES (?)"#, self.table);

        let mut tx = self
            .pool
            .writer
            .begin()
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        for record in records {
            let document = serde_json::to_string(record)
                .map_err(|e| RepositoryError::InvalidRecord(e.to_string()))?;
            sqlx::query(&sql)
                .bind(document)
                .execute(&mut *tx)
                .await
                .map_err(|e| RepositoryError::Query(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(records.len())
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        sqlx::query(&format!(r#"DELETE FROM "{}""#, self.table))
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
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
