//! Core business logic for Fintrack.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Storage is reached only through the collaborator traits declared here
//! (`DashboardSource`, `ListSource`), which the db crate implements.
//!
//! # Modules
//!
//! - `status` - Debt and savings status derivation
//! - `schedule` - Next occurrence of recurring payments
//! - `budget`, `debt`, `recurring`, `saving` - Record types, validation and mutation rules
//! - `aggregation` - Per-domain grouping and facet breakdowns
//! - `dashboard` - Cross-domain summary composition
//! - `listing` - Paginated, searchable, sortable listings

pub mod aggregation;
pub mod budget;
pub mod dashboard;
pub mod debt;
pub mod error;
pub mod listing;
pub mod recurring;
pub mod saving;
pub mod schedule;
pub mod status;

mod validation;

pub use error::{RecordError, RecordResult};
