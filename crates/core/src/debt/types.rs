//! Debt types.

use chrono::{DateTime, NaiveDate, Utc};
use fintrack_shared::types::{DebtId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::RecordResult;
use crate::status::{DebtStatus, DebtTerms, outstanding};

/// A stored debt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    /// Debt ID.
    pub id: DebtId,
    /// Owning user.
    pub owner_id: UserId,
    /// Principal.
    pub debt_amount: Decimal,
    /// Interest percentage.
    pub interest_rate: Decimal,
    /// When the money was borrowed.
    pub debt_taken_date: NaiveDate,
    /// When it is due.
    pub debt_paying_date: NaiveDate,
    /// Repaid so far.
    pub amount_paid: Decimal,
    /// Creditor name.
    pub debt_taken_from_name: String,
    /// Derived payment state.
    pub status: DebtStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Debt {
    /// Status-relevant fields.
    #[must_use]
    pub const fn terms(&self) -> DebtTerms {
        DebtTerms {
            debt_amount: self.debt_amount,
            interest_rate: self.interest_rate,
            debt_paying_date: self.debt_paying_date,
            amount_paid: self.amount_paid,
        }
    }

    /// Total owed minus amount paid.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Derivation` when the balance overflows.
    pub fn outstanding(&self) -> RecordResult<Decimal> {
        outstanding(&self.terms())
    }
}

/// Request body for creating a debt.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDebtInput {
    /// Principal.
    pub debt_amount: Option<Decimal>,
    /// Interest percentage.
    pub interest_rate: Option<Decimal>,
    /// Borrow date.
    pub debt_taken_date: Option<NaiveDate>,
    /// Due date.
    pub debt_paying_date: Option<NaiveDate>,
    /// Creditor name.
    pub debt_taken_from_name: Option<String>,
    /// Repaid so far, zero when absent.
    pub amount_paid: Option<Decimal>,
}

/// Request body for updating a debt. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDebtInput {
    /// New principal.
    pub debt_amount: Option<Decimal>,
    /// New interest percentage.
    pub interest_rate: Option<Decimal>,
    /// New borrow date.
    pub debt_taken_date: Option<NaiveDate>,
    /// New due date.
    pub debt_paying_date: Option<NaiveDate>,
    /// New creditor name.
    pub debt_taken_from_name: Option<String>,
    /// New amount paid.
    pub amount_paid: Option<Decimal>,
}

/// A validated debt ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDebt {
    /// Owning user.
    pub owner_id: UserId,
    /// Principal.
    pub debt_amount: Decimal,
    /// Interest percentage.
    pub interest_rate: Decimal,
    /// Borrow date.
    pub debt_taken_date: NaiveDate,
    /// Due date, never before the borrow date.
    pub debt_paying_date: NaiveDate,
    /// Repaid so far.
    pub amount_paid: Decimal,
    /// Trimmed creditor name.
    pub debt_taken_from_name: String,
    /// Derived on creation.
    pub status: DebtStatus,
}

/// Validated changes to a debt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebtChanges {
    /// New principal.
    pub debt_amount: Option<Decimal>,
    /// New interest percentage.
    pub interest_rate: Option<Decimal>,
    /// New borrow date.
    pub debt_taken_date: Option<NaiveDate>,
    /// New due date.
    pub debt_paying_date: Option<NaiveDate>,
    /// New creditor name.
    pub debt_taken_from_name: Option<String>,
    /// New amount paid.
    pub amount_paid: Option<Decimal>,
}

/// Sortable columns of a debt listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebtSortField {
    /// `createdAt`
    CreatedAt,
    /// `updatedAt`
    UpdatedAt,
    /// `debtAmount`
    DebtAmount,
    /// `interestRate`
    InterestRate,
    /// `debtTakenDate`
    DebtTakenDate,
    /// `debtPayingDate`
    DebtPayingDate,
    /// `amountPaid`
    AmountPaid,
    /// `debtTakenFromName`
    DebtTakenFromName,
    /// `status`
    Status,
}

impl DebtSortField {
    /// Resolves a `sortBy` parameter.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "createdAt" => Some(Self::CreatedAt),
            "updatedAt" => Some(Self::UpdatedAt),
            "debtAmount" => Some(Self::DebtAmount),
            "interestRate" => Some(Self::InterestRate),
            "debtTakenDate" => Some(Self::DebtTakenDate),
            "debtPayingDate" => Some(Self::DebtPayingDate),
            "amountPaid" => Some(Self::AmountPaid),
            "debtTakenFromName" => Some(Self::DebtTakenFromName),
            "status" => Some(Self::Status),
            _ => None,
        }
    }
}
