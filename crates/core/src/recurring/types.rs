//! Recurring payment types.

use chrono::{DateTime, NaiveDate, Utc};
use fintrack_shared::types::{RecurringPaymentId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::schedule::Frequency;

/// A stored recurring payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringPayment {
    /// Payment ID.
    pub id: RecurringPaymentId,
    /// Owning user.
    pub owner_id: UserId,
    /// What the payment is for.
    pub title: String,
    /// Amount per occurrence.
    pub amount: Decimal,
    /// Repeat interval.
    pub frequency: Frequency,
    /// First occurrence.
    pub start_date: NaiveDate,
    /// Last day the payment runs, open-ended when absent.
    pub end_date: Option<NaiveDate>,
    /// Next scheduled occurrence.
    pub next_payment_date: NaiveDate,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl RecurringPayment {
    /// Active while open-ended or the end date is still ahead of `today`.
    #[must_use]
    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.end_date.is_none_or(|end| end > today)
    }
}

/// Request body for creating a recurring payment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecurringPaymentInput {
    /// Title.
    pub title: Option<String>,
    /// Amount per occurrence.
    pub amount: Option<Decimal>,
    /// Repeat interval.
    pub frequency: Option<Frequency>,
    /// First occurrence.
    pub start_date: Option<NaiveDate>,
    /// Optional end date.
    pub end_date: Option<NaiveDate>,
    /// Explicit next occurrence; computed from the start date when absent.
    pub next_payment_date: Option<NaiveDate>,
}

/// Request body for updating a recurring payment. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecurringPaymentInput {
    /// New title.
    pub title: Option<String>,
    /// New amount.
    pub amount: Option<Decimal>,
    /// New interval.
    pub frequency: Option<Frequency>,
    /// New start date.
    pub start_date: Option<NaiveDate>,
    /// New end date.
    pub end_date: Option<NaiveDate>,
}

/// A validated recurring payment ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecurringPayment {
    /// Owning user.
    pub owner_id: UserId,
    /// Trimmed title.
    pub title: String,
    /// Amount per occurrence.
    pub amount: Decimal,
    /// Repeat interval.
    pub frequency: Frequency,
    /// First occurrence.
    pub start_date: NaiveDate,
    /// Optional end date.
    pub end_date: Option<NaiveDate>,
    /// Supplied or computed next occurrence.
    pub next_payment_date: NaiveDate,
}

/// Validated changes to a recurring payment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecurringPaymentChanges {
    /// New title.
    pub title: Option<String>,
    /// New amount.
    pub amount: Option<Decimal>,
    /// New interval.
    pub frequency: Option<Frequency>,
    /// New start date.
    pub start_date: Option<NaiveDate>,
    /// New end date.
    pub end_date: Option<NaiveDate>,
}

/// Sortable columns of a recurring payment listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurringSortField {
    /// `createdAt`
    CreatedAt,
    /// `updatedAt`
    UpdatedAt,
    /// `title`
    Title,
    /// `amount`
    Amount,
    /// `frequency`
    Frequency,
    /// `startDate`
    StartDate,
    /// `endDate`
    EndDate,
    /// `nextPaymentDate`
    NextPaymentDate,
}

impl RecurringSortField {
    /// Resolves a `sortBy` parameter.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "createdAt" => Some(Self::CreatedAt),
            "updatedAt" => Some(Self::UpdatedAt),
            "title" => Some(Self::Title),
            "amount" => Some(Self::Amount),
            "frequency" => Some(Self::Frequency),
            "startDate" => Some(Self::StartDate),
            "endDate" => Some(Self::EndDate),
            "nextPaymentDate" => Some(Self::NextPaymentDate),
            _ => None,
        }
    }
}
