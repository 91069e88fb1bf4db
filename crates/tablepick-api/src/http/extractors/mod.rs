//! Custom Axum extractors.

pub mod request_id;
