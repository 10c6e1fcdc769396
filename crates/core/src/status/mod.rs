//! Status derivation for debts and savings goals.
//!
//! Status is never supplied by callers. It is recomputed from the record's
//! amounts and dates against the current UTC date every time those are written.

pub mod debt;
pub mod saving;

#[cfg(test)]
mod tests;

pub use debt::{DebtStatus, DebtTerms, derive_debt_status, outstanding, total_owed};
pub use saving::{SavingStatus, derive_saving_status};
