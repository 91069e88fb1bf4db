//! Recommendation service.
//!
//! Runs one request through the full pipeline:
//! parse -> build predicate -> scan -> opening-hours filter -> select ->
//! write history -> shape response.

use tablepick_types::error::RecommendationError;
use tablepick_types::history::HistoryRecord;
use tablepick_types::query::QueryParameters;

use crate::clock::{self, Clock};
use crate::filter::build_predicate;
use crate::repository::history::HistoryRepository;
use crate::repository::restaurant::RestaurantRepository;
use crate::response::RecommendationResponse;
use crate::selector::select_first;
use crate::temporal::filter_open_now;

/// Service answering recommendation requests.
///
/// Generic over the repository and clock traits; tablepick-core never depends
/// on tablepick-infra. Built once at startup and shared read-only.
pub struct RecommendationService<R: RestaurantRepository, H: HistoryRepository, C: Clock> {
    restaurants: R,
    history: H,
    clock: C,
}

impl<R: RestaurantRepository, H: HistoryRepository, C: Clock> RecommendationService<R, H, C> {
    pub fn new(restaurants: R, history: H, clock: C) -> Self {
        Self {
            restaurants,
            history,
            clock,
        }
    }

    pub fn restaurants(&self) -> &R {
        &self.restaurants
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Answer one request.
    ///
    /// Runs inside the caller's span; `request_id` is a span field, not an
    /// event field.
    ///
    /// Exactly one history record is written whether or not a restaurant is
    /// found. A failed scan or a failed history write fails the request with
    /// [`RecommendationError::StoreUnavailable`]; nothing is retried.
    pub async fn recommend(
        &self,
        request_id: &str,
        params: QueryParameters,
    ) -> Result<RecommendationResponse, RecommendationError> {
        let now = self.clock.now();
        let predicate = build_predicate(&params);

        tracing::debug!(%predicate, "Scanning restaurants");

        let candidates = self.restaurants.scan(&predicate).await.map_err(|e| {
            tracing::error!(error = %e, "Restaurant scan failed");
            RecommendationError::from(e)
        })?;
        let scanned = candidates.len();

        let open_now = params.open_now_requested();
        let current_time = clock::time_of_day(&now);
        let candidates = filter_open_now(candidates, open_now, &current_time);

        tracing::debug!(
            scanned,
            remaining = candidates.len(),
            open_now,
            current_time = %current_time,
            "Filtered candidates"
        );

        let selection = select_first(candidates);

        let record = HistoryRecord::new(request_id, now, params, selection.clone());
        self.history.put(&record).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to write request history");
            RecommendationError::from(e)
        })?;

        let response = RecommendationResponse::from_selection(selection);
        tracing::info!(
            status = response.status_code,
            found = response.is_found(),
            "Recommendation served"
        );

        Ok(response)
    }
}
