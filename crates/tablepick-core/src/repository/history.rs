//! History repository trait definition.

use tablepick_types::error::RepositoryError;
use tablepick_types::history::HistoryRecord;

/// Repository trait for the request history collection.
///
/// Append-only from the service's point of view: `put` is keyed by
/// `request_id` and nothing here updates or deletes.
pub trait HistoryRepository: Send + Sync {
    /// Persist one history record.
    fn put(
        &self,
        record: &HistoryRecord,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Most recent records first.
    fn recent(
        &self,
        limit: i64,
    ) -> impl std::future::Future<Output = Result<Vec<HistoryRecord>, RepositoryError>> + Send;

    /// Total number of history records.
    fn count(&self) -> impl std::future::Future<Output = Result<i64, RepositoryError>> + Send;
}
