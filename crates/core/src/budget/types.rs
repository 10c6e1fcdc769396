//! Budget entry types.

use chrono::{DateTime, Utc};
use fintrack_shared::types::{BudgetEntryId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether money came in or went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetEntryType {
    /// Money received.
    Income,
    /// Money spent.
    Expense,
}

impl BudgetEntryType {
    /// Both entry types.
    pub const ALL: [Self; 2] = [Self::Income, Self::Expense];

    /// Returns the type as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::fmt::Display for BudgetEntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored income or expense entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetEntry {
    /// Entry ID.
    pub id: BudgetEntryId,
    /// Owning user.
    pub owner_id: UserId,
    /// Income or expense.
    #[serde(rename = "type")]
    pub entry_type: BudgetEntryType,
    /// Positive amount.
    pub amount: Decimal,
    /// Lowercase category, at least 3 characters.
    pub category: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating an entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBudgetEntryInput {
    /// Income or expense.
    #[serde(rename = "type")]
    pub entry_type: Option<BudgetEntryType>,
    /// Amount.
    pub amount: Option<Decimal>,
    /// Category.
    pub category: Option<String>,
}

/// Request body for updating an entry. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBudgetEntryInput {
    /// New type.
    #[serde(rename = "type")]
    pub entry_type: Option<BudgetEntryType>,
    /// New amount.
    pub amount: Option<Decimal>,
    /// New category.
    pub category: Option<String>,
}

/// A validated entry ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBudgetEntry {
    /// Owning user.
    pub owner_id: UserId,
    /// Income or expense.
    pub entry_type: BudgetEntryType,
    /// Positive amount.
    pub amount: Decimal,
    /// Normalized category.
    pub category: String,
}

/// Validated changes to an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetEntryChanges {
    /// New type.
    pub entry_type: Option<BudgetEntryType>,
    /// New amount.
    pub amount: Option<Decimal>,
    /// New normalized category.
    pub category: Option<String>,
}

/// Sortable columns of a budget listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetSortField {
    /// `createdAt`
    CreatedAt,
    /// `updatedAt`
    UpdatedAt,
    /// `type`
    EntryType,
    /// `amount`
    Amount,
    /// `category`
    Category,
}

impl BudgetSortField {
    /// Resolves a `sortBy` parameter.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "createdAt" => Some(Self::CreatedAt),
            "updatedAt" => Some(Self::UpdatedAt),
            "type" => Some(Self::EntryType),
            "amount" => Some(Self::Amount),
            "category" => Some(Self::Category),
            _ => None,
        }
    }
}
