//! Income and expense entries.

pub mod service;
pub mod types;

pub use service::BudgetEntryService;
pub use types::{
    BudgetEntry, BudgetEntryChanges, BudgetEntryType, BudgetSortField, CreateBudgetEntryInput,
    NewBudgetEntry, UpdateBudgetEntryInput,
};
