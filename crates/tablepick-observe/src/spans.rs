//! Span constructors shared by the HTTP and CLI entry points.
//!
//! Every recommendation runs inside a `recommendation` span carrying the
//! request id and the surface it arrived through, so log lines and exported
//! traces for one request can be correlated.

/// Surface value for requests arriving over HTTP.
pub const SOURCE_HTTP: &str = "http";

/// Surface value for requests issued from the CLI.
pub const SOURCE_CLI: &str = "cli";

/// Span wrapping a single recommendation request.
pub fn recommendation_span(request_id: &str, source: &'static str) -> tracing::Span {
    tracing::info_span!("recommendation", request_id = %request_id, source)
}

/// Span wrapping an offline load of the restaurant collection.
pub fn load_span(path: &str) -> tracing::Span {
    tracing::info_span!("load_restaurants", path = %path)
}
