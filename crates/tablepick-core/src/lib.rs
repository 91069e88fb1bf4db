//! Recommendation logic and repository trait definitions for TablePick.
//!
//! This crate defines the "ports" (repository traits) that the infrastructure
//! layer implements, plus the pure request pipeline: filter building,
//! opening-hours filtering, selection and response shaping. It depends only
//! on `tablepick-types` -- never on `tablepick-infra` or any database/IO crate.

pub mod clock;
pub mod filter;
pub mod repository;
pub mod response;
pub mod selector;
pub mod service;
pub mod temporal;
