//! Recurring payment validation and scheduling.

use fintrack_shared::types::UserId;

use super::types::{
    CreateRecurringPaymentInput, NewRecurringPayment, RecurringPayment, RecurringPaymentChanges,
    UpdateRecurringPaymentInput,
};
use crate::error::{RecordError, RecordResult};
use crate::schedule::next_occurrence;
use crate::validation::{amount, non_blank, require};

/// Recurring payment business rules.
pub struct RecurringPaymentService;

impl RecurringPaymentService {
    /// Validates a create request and fills in the next payment date.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Derivation` if the next occurrence is out of range.
    pub fn prepare_create(
        owner_id: UserId,
        input: CreateRecurringPaymentInput,
    ) -> RecordResult<NewRecurringPayment> {
        let title = non_blank(&require(input.title, "title")?, "title")?;
        let amount = amount(require(input.amount, "amount")?, "amount")?;
        let frequency = require(input.frequency, "frequency")?;
        let start_date = require(input.start_date, "startDate")?;

        let next_payment_date = match input.next_payment_date {
            Some(date) => date,
            None => next_occurrence(start_date, frequency)?,
        };

        Ok(NewRecurringPayment {
            owner_id,
            title,
            amount,
            frequency,
            start_date,
            end_date: input.end_date,
            next_payment_date,
        })
    }

    /// Validates an update request.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NoChanges` when no field is present.
    pub fn prepare_update(
        input: UpdateRecurringPaymentInput,
    ) -> RecordResult<RecurringPaymentChanges> {
        if input.title.is_none()
            && input.amount.is_none()
            && input.frequency.is_none()
            && input.start_date.is_none()
            && input.end_date.is_none()
        {
            return Err(RecordError::NoChanges);
        }

        Ok(RecurringPaymentChanges {
            title: input
                .title
                .as_deref()
                .map(|v| non_blank(v, "title"))
                .transpose()?,
            amount: input
                .amount
                .map(|v| amount(v, "amount"))
                .transpose()?,
            frequency: input.frequency,
            start_date: input.start_date,
            end_date: input.end_date,
        })
    }

    /// Returns `existing` with `changes` applied.
    ///
    /// The next payment date is kept as stored; editing the start date or
    /// frequency does not reschedule.
    #[must_use]
    pub fn apply(existing: &RecurringPayment, changes: RecurringPaymentChanges) -> RecurringPayment {
        let mut payment = existing.clone();
        if let Some(v) = changes.title {
            payment.title = v;
        }
        if let Some(v) = changes.amount {
            payment.amount = v;
        }
        if let Some(v) = changes.frequency {
            payment.frequency = v;
        }
        if let Some(v) = changes.start_date {
            payment.start_date = v;
        }
        if let Some(v) = changes.end_date {
            payment.end_date = Some(v);
        }
        payment
    }
}
