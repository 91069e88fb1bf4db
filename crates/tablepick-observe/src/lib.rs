//! Observability for TablePick: tracing subscriber setup and request spans.

pub mod spans;
pub mod tracing_setup;
