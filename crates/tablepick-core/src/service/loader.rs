//! Restaurant collection loader.
//!
//! Seeds the restaurant collection from a JSON array of records. Runs
//! offline, never on the request path.

use tablepick_types::error::LoadError;
use tablepick_types::restaurant::RestaurantRecord;

use crate::repository::restaurant::RestaurantRepository;

/// Records written per `batch_put` call.
pub const BATCH_SIZE: usize = 25;

/// Parse seed file content (a JSON array of restaurant records).
pub fn parse_seed(content: &str) -> Result<Vec<RestaurantRecord>, LoadError> {
    serde_json::from_str(content).map_err(|e| LoadError::Parse(e.to_string()))
}

/// Summary of a load run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub written: usize,
    pub batches: usize,
}

pub struct LoaderService<R: RestaurantRepository> {
    restaurants: R,
}

impl<R: RestaurantRepository> LoaderService<R> {
    pub fn new(restaurants: R) -> Self {
        Self { restaurants }
    }

    /// Write `records` in batches of [`BATCH_SIZE`].
    ///
    /// With `replace`, the collection is emptied first.
    pub async fn load(
        &self,
        records: &[RestaurantRecord],
        replace: bool,
    ) -> Result<LoadSummary, LoadError> {
        if replace {
            tracing::info!("Clearing restaurant collection before load");
            self.restaurants.clear().await?;
        }

        let mut summary = LoadSummary {
            written: 0,
            batches: 0,
        };

        for batch in records.chunks(BATCH_SIZE) {
            let written = self.restaurants.batch_put(batch).await?;
            summary.written += written;
            summary.batches += 1;
            tracing::debug!(batch = summary.batches, written, "Wrote restaurant batch");
        }

        tracing::info!(
            written = summary.written,
            batches = summary.batches,
            "Restaurant collection loaded"
        );

        Ok(summary)
    }

    /// Parse `content` and load it.
    pub async fn load_json(&self, content: &str, replace: bool) -> Result<LoadSummary, LoadError> {
        let records = parse_seed(content)?;
        self.load(&records, replace).await
    }
}
