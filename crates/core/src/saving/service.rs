//! Savings goal validation and status derivation.

use chrono::NaiveDate;
use fintrack_shared::types::UserId;

use super::types::{
    CreateSavingGoalInput, NewSavingGoal, SavingGoal, SavingGoalChanges, UpdateSavingGoalInput,
};
use crate::error::{RecordError, RecordResult};
use crate::status::derive_saving_status;
use crate::validation::{amount, require};

/// Savings goal business rules.
pub struct SavingGoalService;

impl SavingGoalService {
    /// Validates a create request and derives the initial status.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::MissingField` for an absent field and
    /// `RecordError::InvalidValue` for an amount the columns cannot hold.
    pub fn prepare_create(
        owner_id: UserId,
        input: CreateSavingGoalInput,
        today: NaiveDate,
    ) -> RecordResult<NewSavingGoal> {
        let goal_amount = amount(require(input.goal_amount, "goalAmount")?, "goalAmount")?;
        let current_amount = amount(
            require(input.current_amount, "currentAmount")?,
            "currentAmount",
        )?;
        let deadline = require(input.deadline, "deadline")?;

        Ok(NewSavingGoal {
            owner_id,
            goal_amount,
            current_amount,
            deadline,
            status: derive_saving_status(deadline, current_amount, goal_amount, today),
        })
    }

    /// Validates an update request.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NoChanges` when no field is present.
    pub fn prepare_update(input: UpdateSavingGoalInput) -> RecordResult<SavingGoalChanges> {
        if input.goal_amount.is_none() && input.current_amount.is_none() && input.deadline.is_none()
        {
            return Err(RecordError::NoChanges);
        }

        Ok(SavingGoalChanges {
            goal_amount: input
                .goal_amount
                .map(|v| amount(v, "goalAmount"))
                .transpose()?,
            current_amount: input
                .current_amount
                .map(|v| amount(v, "currentAmount"))
                .transpose()?,
            deadline: input.deadline,
        })
    }

    /// Returns `existing` with `changes` applied and the status re-derived on `today`.
    #[must_use]
    pub fn apply(existing: &SavingGoal, changes: SavingGoalChanges, today: NaiveDate) -> SavingGoal {
        let mut goal = existing.clone();
        if let Some(v) = changes.goal_amount {
            goal.goal_amount = v;
        }
        if let Some(v) = changes.current_amount {
            goal.current_amount = v;
        }
        if let Some(v) = changes.deadline {
            goal.deadline = v;
        }
        goal.status = derive_saving_status(goal.deadline, goal.current_amount, goal.goal_amount, today);
        goal
    }
}
