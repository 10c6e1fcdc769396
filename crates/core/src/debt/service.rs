//! Debt validation and status derivation.

use chrono::NaiveDate;
use fintrack_shared::types::UserId;
use rust_decimal::Decimal;

use super::types::{CreateDebtInput, Debt, DebtChanges, NewDebt, UpdateDebtInput};
use crate::error::{RecordError, RecordResult};
use crate::status::{DebtTerms, derive_debt_status};
use crate::validation::{amount, non_blank, rate, require};

/// Debt business rules.
pub struct DebtService;

impl DebtService {
    /// Validates a create request and derives the initial status.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::InvalidDateOrder` when the paying date precedes the taken date,
    /// `RecordError::InvalidValue` for amounts or rates the columns cannot hold.
    pub fn prepare_create(
        owner_id: UserId,
        input: CreateDebtInput,
        today: NaiveDate,
    ) -> RecordResult<NewDebt> {
        let debt_amount = amount(require(input.debt_amount, "debtAmount")?, "debtAmount")?;
        let interest_rate = rate(require(input.interest_rate, "interestRate")?, "interestRate")?;
        let debt_taken_date = require(input.debt_taken_date, "debtTakenDate")?;
        let debt_paying_date = require(input.debt_paying_date, "debtPayingDate")?;
        let debt_taken_from_name = non_blank(
            &require(input.debt_taken_from_name, "debtTakenFromName")?,
            "debtTakenFromName",
        )?;
        let amount_paid = amount(input.amount_paid.unwrap_or(Decimal::ZERO), "amountPaid")?;

        if debt_paying_date < debt_taken_date {
            return Err(RecordError::InvalidDateOrder);
        }

        let status = derive_debt_status(
            &DebtTerms {
                debt_amount,
                interest_rate,
                debt_paying_date,
                amount_paid,
            },
            today,
        )?;

        Ok(NewDebt {
            owner_id,
            debt_amount,
            interest_rate,
            debt_taken_date,
            debt_paying_date,
            amount_paid,
            debt_taken_from_name,
            status,
        })
    }

    /// Validates an update request.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NoChanges` when no field is present.
    pub fn prepare_update(input: UpdateDebtInput) -> RecordResult<DebtChanges> {
        if input.debt_amount.is_none()
            && input.interest_rate.is_none()
            && input.debt_taken_date.is_none()
            && input.debt_paying_date.is_none()
            && input.debt_taken_from_name.is_none()
            && input.amount_paid.is_none()
        {
            return Err(RecordError::NoChanges);
        }

        Ok(DebtChanges {
            debt_amount: input
                .debt_amount
                .map(|v| amount(v, "debtAmount"))
                .transpose()?,
            interest_rate: input
                .interest_rate
                .map(|v| rate(v, "interestRate"))
                .transpose()?,
            debt_taken_date: input.debt_taken_date,
            debt_paying_date: input.debt_paying_date,
            debt_taken_from_name: input
                .debt_taken_from_name
                .as_deref()
                .map(|v| non_blank(v, "debtTakenFromName"))
                .transpose()?,
            amount_paid: input
                .amount_paid
                .map(|v| amount(v, "amountPaid"))
                .transpose()?,
        })
    }

    /// Returns `existing` with `changes` applied and the status re-derived on `today`.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::InvalidDateOrder` when the merged dates are out of order.
    pub fn apply(existing: &Debt, changes: DebtChanges, today: NaiveDate) -> RecordResult<Debt> {
        let mut debt = existing.clone();
        if let Some(v) = changes.debt_amount {
            debt.debt_amount = v;
        }
        if let Some(v) = changes.interest_rate {
            debt.interest_rate = v;
        }
        if let Some(v) = changes.debt_taken_date {
            debt.debt_taken_date = v;
        }
        if let Some(v) = changes.debt_paying_date {
            debt.debt_paying_date = v;
        }
        if let Some(v) = changes.debt_taken_from_name {
            debt.debt_taken_from_name = v;
        }
        if let Some(v) = changes.amount_paid {
            debt.amount_paid = v;
        }
        if debt.debt_paying_date < debt.debt_taken_date {
            return Err(RecordError::InvalidDateOrder);
        }
        debt.status = derive_debt_status(&debt.terms(), today)?;
        Ok(debt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::DebtStatus;
    use chrono::Utc;
    use fintrack_shared::types::DebtId;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_input() -> CreateDebtInput {
        CreateDebtInput {
            debt_amount: Some(dec!(1000)),
            interest_rate: Some(dec!(10)),
            debt_taken_date: Some(date(2024, 1, 1)),
            debt_paying_date: Some(date(2024, 6, 1)),
            debt_taken_from_name: Some(" Bank ".to_string()),
            amount_paid: None,
        }
    }

    fn stored(status: DebtStatus) -> Debt {
        let now = Utc::now();
        Debt {
            id: DebtId::new(),
            owner_id: UserId::new(),
            debt_amount: dec!(1000),
            interest_rate: dec!(10),
            debt_taken_date: date(2024, 1, 1),
            debt_paying_date: date(2024, 6, 1),
            amount_paid: dec!(0),
            debt_taken_from_name: "bank".to_string(),
            status,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_prepare_create_defaults_amount_paid() {
        let debt = DebtService::prepare_create(UserId::new(), create_input(), date(2024, 2, 1))
            .unwrap();
        assert_eq!(debt.amount_paid, dec!(0));
        assert_eq!(debt.debt_taken_from_name, "Bank");
        assert_eq!(debt.status, DebtStatus::Pending);
    }

    #[test]
    fn test_prepare_create_derives_overdue() {
        let debt = DebtService::prepare_create(UserId::new(), create_input(), date(2024, 7, 1))
            .unwrap();
        assert_eq!(debt.status, DebtStatus::Overdue);
    }

    #[test]
    fn test_prepare_create_rejects_paying_before_taken() {
        let mut input = create_input();
        input.debt_taken_date = Some(date(2024, 3, 1));
        input.debt_paying_date = Some(date(2024, 2, 1));
        let err = DebtService::prepare_create(UserId::new(), input, date(2024, 2, 1)).unwrap_err();
        assert!(matches!(err, RecordError::InvalidDateOrder));
    }

    #[test]
    fn test_prepare_create_allows_same_day_and_zero_interest() {
        let mut input = create_input();
        input.interest_rate = Some(dec!(0));
        input.debt_paying_date = input.debt_taken_date;
        assert!(DebtService::prepare_create(UserId::new(), input, date(2024, 1, 1)).is_ok());
    }

    #[test]
    fn test_prepare_create_rejects_negative_amounts() {
        let mut input = create_input();
        input.amount_paid = Some(dec!(-5));
        let err = DebtService::prepare_create(UserId::new(), input, date(2024, 2, 1)).unwrap_err();
        assert!(matches!(err, RecordError::NegativeAmount("amountPaid")));
    }

    #[test]
    fn test_prepare_create_rejects_amount_too_large_to_store() {
        let mut input = create_input();
        input.debt_amount = Some(Decimal::MAX);
        let err = DebtService::prepare_create(UserId::new(), input, date(2024, 2, 1)).unwrap_err();
        assert!(matches!(err, RecordError::InvalidValue { field: "debtAmount", .. }));
    }

    #[test]
    fn test_prepare_create_rejects_rate_too_large_to_store() {
        let mut input = create_input();
        input.interest_rate = Some(dec!(100000));
        let err = DebtService::prepare_create(UserId::new(), input, date(2024, 2, 1)).unwrap_err();
        assert!(matches!(err, RecordError::InvalidValue { field: "interestRate", .. }));
    }

    #[test]
    fn test_prepare_create_rejects_long_creditor_name() {
        let mut input = create_input();
        input.debt_taken_from_name = Some("b".repeat(256));
        let err = DebtService::prepare_create(UserId::new(), input, date(2024, 2, 1)).unwrap_err();
        assert!(matches!(err, RecordError::InvalidValue { field: "debtTakenFromName", .. }));
    }

    #[test]
    fn test_prepare_update_rejects_sub_cent_fraction() {
        let err = DebtService::prepare_update(UpdateDebtInput {
            amount_paid: Some(dec!(10.00001)),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, RecordError::InvalidValue { field: "amountPaid", .. }));
    }

    #[test]
    fn test_prepare_create_requires_creditor() {
        let mut input = create_input();
        input.debt_taken_from_name = Some("   ".to_string());
        let err = DebtService::prepare_create(UserId::new(), input, date(2024, 2, 1)).unwrap_err();
        assert!(matches!(err, RecordError::MissingField("debtTakenFromName")));
    }

    #[test]
    fn test_prepare_update_requires_a_field() {
        let err = DebtService::prepare_update(UpdateDebtInput::default()).unwrap_err();
        assert!(matches!(err, RecordError::NoChanges));
    }

    #[test]
    fn test_paying_off_overdue_debt_marks_it_paid() {
        let existing = stored(DebtStatus::Overdue);
        let changes = DebtService::prepare_update(UpdateDebtInput {
            amount_paid: Some(dec!(1100)),
            ..Default::default()
        })
        .unwrap();
        let updated = DebtService::apply(&existing, changes, date(2024, 7, 1)).unwrap();
        assert_eq!(updated.status, DebtStatus::Paid);
        assert_eq!(updated.outstanding().unwrap(), dec!(0));
    }

    #[test]
    fn test_partial_payment_past_due_stays_overdue() {
        let existing = stored(DebtStatus::Overdue);
        let changes = DebtService::prepare_update(UpdateDebtInput {
            amount_paid: Some(dec!(500)),
            ..Default::default()
        })
        .unwrap();
        let updated = DebtService::apply(&existing, changes, date(2024, 7, 1)).unwrap();
        assert_eq!(updated.status, DebtStatus::Overdue);
    }

    #[test]
    fn test_extending_due_date_returns_to_pending() {
        let existing = stored(DebtStatus::Overdue);
        let changes = DebtService::prepare_update(UpdateDebtInput {
            debt_paying_date: Some(date(2024, 12, 1)),
            ..Default::default()
        })
        .unwrap();
        let updated = DebtService::apply(&existing, changes, date(2024, 7, 1)).unwrap();
        assert_eq!(updated.status, DebtStatus::Pending);
        assert_eq!(updated.debt_amount, existing.debt_amount);
    }

    #[test]
    fn test_update_cannot_move_paying_date_before_taken_date() {
        let existing = stored(DebtStatus::Pending);
        let changes = DebtService::prepare_update(UpdateDebtInput {
            debt_paying_date: Some(date(2023, 12, 1)),
            ..Default::default()
        })
        .unwrap();
        let err = DebtService::apply(&existing, changes, date(2024, 2, 1)).unwrap_err();
        assert!(matches!(err, RecordError::InvalidDateOrder));
    }
}
