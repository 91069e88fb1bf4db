//! HTTP layer for TablePick.
//!
//! Axum-based API serving `GET /recommendation` (also mounted under
//! `/api/v1/`) plus a health probe, with CORS and request tracing.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod router;
