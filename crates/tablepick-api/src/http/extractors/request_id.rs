//! Request id extractor.
//!
//! Uses the caller's `x-request-id` header when present and non-empty,
//! otherwise mints a fresh UUIDv7. The id keys the history record.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::http::error::AppError;
use crate::state::AppState;

/// Header carrying a caller-supplied request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Identifier of the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn from_parts(parts: &Parts) -> Self {
        let supplied = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty());

        match supplied {
            Some(id) => RequestId(id.to_string()),
            None => RequestId(uuid::Uuid::now_v7().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequestParts<AppState> for RequestId {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(RequestId::from_parts(parts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with(header: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/recommendation");
        if let Some(value) = header {
            builder = builder.header(REQUEST_ID_HEADER, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn header_value_is_used() {
        let parts = parts_with(Some("req-42"));
        assert_eq!(RequestId::from_parts(&parts).as_str(), "req-42");
    }

    #[test]
    fn missing_header_generates_uuid() {
        let parts = parts_with(None);
        let id = RequestId::from_parts(&parts);
        let parsed = uuid::Uuid::parse_str(id.as_str()).unwrap();
        assert_eq!(parsed.get_version_num(), 7);
    }

    #[test]
    fn blank_header_generates_uuid() {
        let parts = parts_with(Some("   "));
        let id = RequestId::from_parts(&parts);
        assert!(uuid::Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn generated_ids_differ() {
        let a = RequestId::from_parts(&parts_with(None));
        let b = RequestId::from_parts(&parts_with(None));
        assert_ne!(a, b);
    }
}
