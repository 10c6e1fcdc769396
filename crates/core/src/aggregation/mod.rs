//! In-memory grouping and facet breakdowns over one owner's records.
//!
//! Every function here takes the full record set of one domain. An empty input
//! yields empty lists and `None` totals.

mod budget;
mod debt;
mod recurring;
mod saving;
mod window;


pub use budget::{BudgetBucket, BudgetTypeGroup};
pub use debt::{CreditorBreakdown, DebtFacets, DebtStatusBreakdown, DebtTotals};
pub use recurring::{FrequencyBreakdown, RecurringFacets, RecurringTotals, UpcomingPayment};
pub use saving::{SavingFacets, SavingStatusCount, SavingTotals, UpcomingDeadline};
pub use window::UpcomingWindow;

/// Groups and summarizes records per domain.
pub struct RecordAggregator;
