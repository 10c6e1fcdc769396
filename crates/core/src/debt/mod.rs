//! Borrowed money and its repayment.

pub mod service;
pub mod types;

pub use service::DebtService;
pub use types::{CreateDebtInput, Debt, DebtChanges, DebtSortField, NewDebt, UpdateDebtInput};
