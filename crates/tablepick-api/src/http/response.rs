//! Conversion of a shaped recommendation into an axum response.
//!
//! The core builds a transport-neutral `{status_code, headers, body}`; this
//! module carries it onto the wire unchanged.

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use tablepick_core::response::RecommendationResponse;

use crate::http::error::AppError;

/// Newtype so the core response can implement `IntoResponse` here.
#[derive(Debug)]
pub struct RecommendationReply(pub RecommendationResponse);

impl RecommendationReply {
    fn try_into_response(self) -> Result<Response, AppError> {
        let status = StatusCode::from_u16(self.0.status_code)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        let body = self
            .0
            .body_json()
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let mut response = (status, body).into_response();
        let headers = response.headers_mut();
        for (name, value) in &self.0.headers {
            let name = HeaderName::try_from(name.as_str())
                .map_err(|e| AppError::Internal(e.to_string()))?;
            let value =
                HeaderValue::from_str(value).map_err(|e| AppError::Internal(e.to_string()))?;
            headers.insert(name, value);
        }
        Ok(response)
    }
}

impl IntoResponse for RecommendationReply {
    fn into_response(self) -> Response {
        match self.try_into_response() {
            Ok(response) => response,
            Err(e) => e.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablepick_types::restaurant::RestaurantRecord;

    async fn body_of(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn found_reply_carries_record() {
        let record = RestaurantRecord::new("korean", true, "10:00", "23:00")
            .with_attribute("name", serde_json::json!("Seoul Kitchen"));
        let reply = RecommendationReply(RecommendationResponse::from_selection(Some(record)));
        let response = reply.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "application/json");
        let body = body_of(response).await;
        assert_eq!(body["restaurantRecommendation"]["name"], "Seoul Kitchen");
        assert_eq!(body["restaurantRecommendation"]["vegetarian"], true);
    }

    #[tokio::test]
    async fn empty_reply_is_404_null() {
        let reply = RecommendationReply(RecommendationResponse::from_selection(None));
        let response = reply.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()["content-type"], "application/json");
        let body = body_of(response).await;
        assert_eq!(body, serde_json::json!({ "restaurantRecommendation": null }));
    }
}
