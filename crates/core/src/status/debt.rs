//! Debt status rules.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{RecordError, RecordResult};

/// Payment state of a debt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DebtStatus {
    /// Not yet repaid and not past due.
    Pending,
    /// Repaid in full, principal plus interest.
    Paid,
    /// Past the paying date with a balance outstanding.
    Overdue,
}

impl DebtStatus {
    /// Returns the status as stored and serialized.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Overdue => "Overdue",
        }
    }
}

impl std::fmt::Display for DebtStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fields of a debt that decide its status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebtTerms {
    /// Principal.
    pub debt_amount: Decimal,
    /// Interest as a percentage of the principal.
    pub interest_rate: Decimal,
    /// Due date.
    pub debt_paying_date: NaiveDate,
    /// Repaid so far.
    pub amount_paid: Decimal,
}

/// Principal plus simple interest: `debt_amount + debt_amount * interest_rate / 100`.
///
/// # Errors
///
/// Returns `RecordError::Derivation` when the result does not fit a `Decimal`.
pub fn total_owed(debt_amount: Decimal, interest_rate: Decimal) -> RecordResult<Decimal> {
    debt_amount
        .checked_mul(interest_rate)
        .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
        .and_then(|interest| debt_amount.checked_add(interest))
        .ok_or_else(|| {
            RecordError::Derivation(format!(
                "total owed on {debt_amount} at {interest_rate}% overflows"
            ))
        })
}

/// Remaining balance, `total_owed - amount_paid`. May be negative when overpaid.
///
/// # Errors
///
/// Returns `RecordError::Derivation` when the balance does not fit a `Decimal`.
pub fn outstanding(terms: &DebtTerms) -> RecordResult<Decimal> {
    total_owed(terms.debt_amount, terms.interest_rate)?
        .checked_sub(terms.amount_paid)
        .ok_or_else(|| RecordError::Derivation("outstanding balance overflows".to_string()))
}

/// Derives the status of a debt on `today`.
///
/// Paid once the total owed is covered, Overdue when past the paying date
/// otherwise, else Pending.
///
/// # Errors
///
/// Returns `RecordError::Derivation` when the total owed overflows.
pub fn derive_debt_status(terms: &DebtTerms, today: NaiveDate) -> RecordResult<DebtStatus> {
    let status = if terms.amount_paid >= total_owed(terms.debt_amount, terms.interest_rate)? {
        DebtStatus::Paid
    } else if today > terms.debt_paying_date {
        DebtStatus::Overdue
    } else {
        DebtStatus::Pending
    };
    Ok(status)
}
