//! Infrastructure layer for TablePick.
//!
//! Contains implementations of the repository traits defined in
//! `tablepick-core` (SQLite storage for the restaurant and history
//! collections), configuration loading, data directory resolution and seed
//! file reading.

pub mod config;
pub mod filesystem;
pub mod sqlite;
