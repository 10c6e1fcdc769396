//! Budget entry validation and normalization.

use fintrack_shared::types::UserId;
use rust_decimal::Decimal;

use super::types::{
    BudgetEntry, BudgetEntryChanges, CreateBudgetEntryInput, NewBudgetEntry,
    UpdateBudgetEntryInput,
};
use crate::error::{RecordError, RecordResult};
use crate::validation::{amount, max_len, require};

/// Budget entry business rules.
pub struct BudgetEntryService;

impl BudgetEntryService {
    /// Minimum category length after trimming.
    pub const MIN_CATEGORY_LEN: usize = 3;

    /// Validates a create request.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::MissingField` for an absent field and
    /// `RecordError::InvalidValue` for a zero amount or a malformed category.
    pub fn prepare_create(
        owner_id: UserId,
        input: CreateBudgetEntryInput,
    ) -> RecordResult<NewBudgetEntry> {
        let entry_type = require(input.entry_type, "type")?;
        let amount = Self::validate_amount(require(input.amount, "amount")?)?;
        let category = Self::normalize_category(&require(input.category, "category")?)?;

        Ok(NewBudgetEntry {
            owner_id,
            entry_type,
            amount,
            category,
        })
    }

    /// Validates an update request.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NoChanges` when no field is present.
    pub fn prepare_update(input: UpdateBudgetEntryInput) -> RecordResult<BudgetEntryChanges> {
        if input.entry_type.is_none() && input.amount.is_none() && input.category.is_none() {
            return Err(RecordError::NoChanges);
        }

        Ok(BudgetEntryChanges {
            entry_type: input.entry_type,
            amount: input.amount.map(Self::validate_amount).transpose()?,
            category: input
                .category
                .as_deref()
                .map(Self::normalize_category)
                .transpose()?,
        })
    }

    /// Returns `existing` with `changes` applied.
    #[must_use]
    pub fn apply(existing: &BudgetEntry, changes: BudgetEntryChanges) -> BudgetEntry {
        let mut entry = existing.clone();
        if let Some(entry_type) = changes.entry_type {
            entry.entry_type = entry_type;
        }
        if let Some(amount) = changes.amount {
            entry.amount = amount;
        }
        if let Some(category) = changes.category {
            entry.category = category;
        }
        entry
    }

    /// Trims and lowercases a category.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::InvalidValue` when fewer than 3 or more than 255 characters remain.
    pub fn normalize_category(raw: &str) -> RecordResult<String> {
        let category = raw.trim().to_lowercase();
        if category.chars().count() < Self::MIN_CATEGORY_LEN {
            return Err(RecordError::invalid(
                "category",
                format!(
                    "must be at least {} characters",
                    Self::MIN_CATEGORY_LEN
                ),
            ));
        }
        max_len(category, "category")
    }

    fn validate_amount(value: Decimal) -> RecordResult<Decimal> {
        let value = amount(value, "amount")?;
        if value.is_zero() {
            return Err(RecordError::invalid("amount", "must be greater than zero"));
        }
        Ok(value)
    }
}
