//! Savings goal status rules.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Progress state of a savings goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SavingStatus {
    /// Deadline not passed and goal not reached.
    Active,
    /// Deadline passed.
    Missed,
    /// Goal reached before the deadline passed.
    Completed,
}

impl SavingStatus {
    /// Returns the status as stored and serialized.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Missed => "missed",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for SavingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derives the status of a savings goal on `today`.
///
/// A passed deadline wins over a reached goal.
#[must_use]
pub fn derive_saving_status(
    deadline: NaiveDate,
    current_amount: Decimal,
    goal_amount: Decimal,
    today: NaiveDate,
) -> SavingStatus {
    if today > deadline {
        SavingStatus::Missed
    } else if current_amount >= goal_amount {
        SavingStatus::Completed
    } else {
        SavingStatus::Active
    }
}
