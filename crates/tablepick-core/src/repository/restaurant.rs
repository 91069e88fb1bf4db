//! Restaurant repository trait definition.

use tablepick_types::error::RepositoryError;
use tablepick_types::predicate::Predicate;
use tablepick_types::restaurant::RestaurantRecord;

/// Repository trait for the restaurant collection.
///
/// Implementations live in tablepick-infra (e.g., SqliteRestaurantRepository).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait RestaurantRepository: Send + Sync {
    /// Return every record matching all conditions of `predicate`.
    ///
    /// An empty predicate returns the whole collection. Records come back in
    /// the store's native order; callers must not assume any sorting.
    fn scan(
        &self,
        predicate: &Predicate,
    ) -> impl std::future::Future<Output = Result<Vec<RestaurantRecord>, RepositoryError>> + Send;

    /// Write a batch of records. Returns the number written.
    fn batch_put(
        &self,
        records: &[RestaurantRecord],
    ) -> impl std::future::Future<Output = Result<usize, RepositoryError>> + Send;

    /// Remove every record from the collection.
    fn clear(&self) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Number of records in the collection.
    fn count(&self) -> impl std::future::Future<Output = Result<i64, RepositoryError>> + Send;
}
