//! Cross-domain dashboard summary.

pub mod composer;
pub mod service;
pub mod types;


pub use composer::{DashboardComposer, DomainAggregates};
pub use service::{DashboardService, DashboardSource};
pub use types::DashboardSummary;
