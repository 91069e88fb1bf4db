//! HTTP request handlers.

pub mod recommendation;
