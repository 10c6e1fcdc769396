//! Savings goal types.

use chrono::{DateTime, NaiveDate, Utc};
use fintrack_shared::types::{SavingGoalId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::status::SavingStatus;

/// A stored savings goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingGoal {
    /// Goal ID.
    pub id: SavingGoalId,
    /// Owning user.
    pub owner_id: UserId,
    /// Target amount.
    pub goal_amount: Decimal,
    /// Saved so far.
    pub current_amount: Decimal,
    /// Target date.
    pub deadline: NaiveDate,
    /// Derived progress state.
    pub status: SavingStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a goal.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSavingGoalInput {
    /// Target amount.
    pub goal_amount: Option<Decimal>,
    /// Saved so far.
    pub current_amount: Option<Decimal>,
    /// Target date.
    pub deadline: Option<NaiveDate>,
}

/// Request body for updating a goal. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSavingGoalInput {
    /// New target amount.
    pub goal_amount: Option<Decimal>,
    /// New saved amount.
    pub current_amount: Option<Decimal>,
    /// New target date.
    pub deadline: Option<NaiveDate>,
}

/// A validated goal ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSavingGoal {
    /// Owning user.
    pub owner_id: UserId,
    /// Target amount.
    pub goal_amount: Decimal,
    /// Saved so far.
    pub current_amount: Decimal,
    /// Target date.
    pub deadline: NaiveDate,
    /// Derived on creation.
    pub status: SavingStatus,
}

/// Validated changes to a goal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavingGoalChanges {
    /// New target amount.
    pub goal_amount: Option<Decimal>,
    /// New saved amount.
    pub current_amount: Option<Decimal>,
    /// New target date.
    pub deadline: Option<NaiveDate>,
}

/// Sortable columns of a savings listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavingSortField {
    /// `createdAt`
    CreatedAt,
    /// `updatedAt`
    UpdatedAt,
    /// `goalAmount`
    GoalAmount,
    /// `currentAmount`
    CurrentAmount,
    /// `deadline`
    Deadline,
    /// `status`
    Status,
}

impl SavingSortField {
    /// Resolves a `sortBy` parameter.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "createdAt" => Some(Self::CreatedAt),
            "updatedAt" => Some(Self::UpdatedAt),
            "goalAmount" => Some(Self::GoalAmount),
            "currentAmount" => Some(Self::CurrentAmount),
            "deadline" => Some(Self::Deadline),
            "status" => Some(Self::Status),
            _ => None,
        }
    }
}
