//! Shared domain types for TablePick.
//!
//! This crate contains the domain types used across the TablePick workspace:
//! restaurant records, query parameters, predicate descriptions, history
//! records, service configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod config;
pub mod error;
pub mod history;
pub mod predicate;
pub mod query;
pub mod restaurant;
