//! Recommendation handler.

use std::time::Instant;

use axum::extract::{Query, State};
use tracing::Instrument;

use tablepick_observe::spans::{recommendation_span, SOURCE_HTTP};
use tablepick_types::query::QueryParameters;

use crate::http::error::AppError;
use crate::http::extractors::request_id::RequestId;
use crate::http::response::RecommendationReply;
use crate::state::AppState;

/// GET /recommendation - Recommend the first restaurant matching the query.
///
/// Query keys: `style`, `vegetarian`, `isOpenNow`. Other keys are recorded
/// in history but never filter; a repeated key keeps its last value.
pub async fn get_recommendation(
    State(state): State<AppState>,
    request_id: RequestId,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<RecommendationReply, AppError> {
    let params = QueryParameters::from_pairs(pairs);
    let span = recommendation_span(request_id.as_str(), SOURCE_HTTP);

    async move {
        let start = Instant::now();
        let response = state
            .recommendation_service
            .recommend(request_id.as_str(), params)
            .await?;

        tracing::debug!(
            status = response.status_code,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Response ready"
        );
        Ok::<_, AppError>(RecommendationReply(response))
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use tablepick_core::repository::history::HistoryRepository;
    use tablepick_types::restaurant::RestaurantRecord;

    use crate::state::test_support::test_state;

    async fn seeded_state() -> AppState {
        let state = test_state().await;
        let records = vec![
            RestaurantRecord::new("italian", false, "00:00", "23:59")
                .with_attribute("name", serde_json::json!("Trattoria Uno")),
            RestaurantRecord::new("italian", true, "00:00", "23:59")
                .with_attribute("name", serde_json::json!("Verde")),
            RestaurantRecord::new("french", false, "00:00", "23:59")
                .with_attribute("name", serde_json::json!("Le Coin")),
        ];
        state.loader_service.load(&records, false).await.unwrap();
        state
    }

    fn params(style: Option<&str>, vegetarian: Option<&str>, open: Option<&str>) -> QueryParameters {
        QueryParameters {
            style: style.map(String::from),
            vegetarian: vegetarian.map(String::from),
            is_open_now: open.map(String::from),
            ..Default::default()
        }
    }

    fn pairs(query: &QueryParameters) -> Vec<(String, String)> {
        [
            ("style", &query.style),
            ("vegetarian", &query.vegetarian),
            ("isOpenNow", &query.is_open_now),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.clone().map(|v| (k.to_string(), v)))
        .collect()
    }

    async fn call(
        state: &AppState,
        id: &str,
        query: QueryParameters,
    ) -> (StatusCode, serde_json::Value) {
        call_raw(state, id, pairs(&query)).await
    }

    async fn call_raw(
        state: &AppState,
        id: &str,
        query_pairs: Vec<(String, String)>,
    ) -> (StatusCode, serde_json::Value) {
        let reply = get_recommendation(
            State(state.clone()),
            RequestId(id.to_string()),
            Query(query_pairs),
        )
        .await
        .unwrap();
        let response = reply.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn style_filter_returns_first_match() {
        let state = seeded_state().await;
        let (status, body) = call(&state, "r1", params(Some("italian"), None, None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["restaurantRecommendation"]["name"], "Trattoria Uno");
    }

    #[tokio::test]
    async fn vegetarian_filter_narrows_match() {
        let state = seeded_state().await;
        let (status, body) =
            call(&state, "r2", params(Some("italian"), Some("TRUE"), None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["restaurantRecommendation"]["name"], "Verde");
    }

    #[tokio::test]
    async fn open_now_keeps_all_day_restaurants() {
        let state = seeded_state().await;
        let (status, body) = call(&state, "r3", params(Some("french"), None, Some("true"))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["restaurantRecommendation"]["name"], "Le Coin");
    }

    #[tokio::test]
    async fn no_match_is_404_and_still_recorded() {
        let state = seeded_state().await;
        let (status, body) = call(&state, "r4", params(Some("thai"), None, None)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["restaurantRecommendation"].is_null());

        let history = state.recommendation_service.history();
        let recent = history.recent(10).await.unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].request_id, "r4");
        assert!(recent[0].response.is_none());
        assert_eq!(recent[0].parameters.style.as_deref(), Some("thai"));
    }

    #[tokio::test]
    async fn every_request_writes_one_history_record() {
        let state = seeded_state().await;
        call(&state, "a", params(None, None, None)).await;
        call(&state, "b", params(Some("french"), None, None)).await;

        let history = state.recommendation_service.history();
        assert_eq!(history.count().await.unwrap(), 2);
    }

    fn raw(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn repeated_key_query_string_is_accepted() {
        let uri: axum::http::Uri = "/recommendation?style=thai&style=french&foo=bar"
            .parse()
            .unwrap();
        let Query(extracted) = Query::<Vec<(String, String)>>::try_from_uri(&uri).unwrap();
        assert_eq!(
            extracted,
            raw(&[("style", "thai"), ("style", "french"), ("foo", "bar")])
        );
    }

    #[tokio::test]
    async fn repeated_key_keeps_last_value_and_is_recorded() {
        let state = seeded_state().await;
        let (status, body) = call_raw(
            &state,
            "dup",
            raw(&[("style", "thai"), ("style", "french")]),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["restaurantRecommendation"]["name"], "Le Coin");

        let recent = state.recommendation_service.history().recent(10).await.unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].request_id, "dup");
        assert_eq!(recent[0].parameters.style.as_deref(), Some("french"));
    }

    #[tokio::test]
    async fn unknown_keys_are_recorded_and_ignored() {
        let state = seeded_state().await;
        let (status, body) = call_raw(&state, "extra", raw(&[("foo", "bar")])).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["restaurantRecommendation"]["name"], "Trattoria Uno");

        let recent = state.recommendation_service.history().recent(10).await.unwrap();
        assert_eq!(
            recent[0].parameters.extra.get("foo").map(String::as_str),
            Some("bar")
        );
    }
}
