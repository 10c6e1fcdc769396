//! Property-based tests for status derivation.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::error::RecordError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn terms(debt_amount: Decimal, interest_rate: Decimal, paying: NaiveDate, paid: Decimal) -> DebtTerms {
    DebtTerms {
        debt_amount,
        interest_rate,
        debt_paying_date: paying,
        amount_paid: paid,
    }
}

#[test]
fn test_total_owed_adds_simple_interest() {
    assert_eq!(total_owed(dec!(1000), dec!(10)).unwrap(), dec!(1100));
    assert_eq!(total_owed(dec!(250.50), dec!(0)).unwrap(), dec!(250.50));
    assert_eq!(total_owed(dec!(200), dec!(2.5)).unwrap(), dec!(205));
}

#[test]
fn test_debt_fully_repaid_is_paid() {
    let t = terms(dec!(1000), dec!(10), date(2024, 6, 1), dec!(1100));
    assert_eq!(
        derive_debt_status(&t, date(2024, 5, 1)).unwrap(),
        DebtStatus::Paid
    );
    assert_eq!(outstanding(&t).unwrap(), dec!(0));
}

#[test]
fn test_debt_past_due_with_balance_is_overdue() {
    let t = terms(dec!(1000), dec!(10), date(2024, 6, 1), dec!(500));
    assert_eq!(
        derive_debt_status(&t, date(2024, 6, 2)).unwrap(),
        DebtStatus::Overdue
    );
    assert_eq!(outstanding(&t).unwrap(), dec!(600));
}

#[test]
fn test_debt_due_today_is_still_pending() {
    let t = terms(dec!(1000), dec!(10), date(2024, 6, 1), dec!(500));
    assert_eq!(
        derive_debt_status(&t, date(2024, 6, 1)).unwrap(),
        DebtStatus::Pending
    );
}

#[test]
fn test_overpaid_debt_is_paid_with_negative_outstanding() {
    let t = terms(dec!(100), dec!(0), date(2024, 1, 1), dec!(150));
    assert_eq!(
        derive_debt_status(&t, date(2025, 1, 1)).unwrap(),
        DebtStatus::Paid
    );
    assert_eq!(outstanding(&t).unwrap(), dec!(-50));
}

#[test]
fn test_total_owed_overflow_is_an_error() {
    let err = total_owed(Decimal::MAX, dec!(10)).unwrap_err();
    assert!(matches!(err, RecordError::Derivation(_)));

    let t = terms(Decimal::MAX, dec!(10), date(2024, 6, 1), dec!(0));
    assert!(matches!(
        derive_debt_status(&t, date(2024, 5, 1)),
        Err(RecordError::Derivation(_))
    ));
    assert!(outstanding(&t).is_err());
}

#[test]
fn test_outstanding_overflow_is_an_error() {
    let t = terms(Decimal::MAX, dec!(0), date(2024, 6, 1), Decimal::MIN);
    assert!(matches!(outstanding(&t), Err(RecordError::Derivation(_))));
}

#[test]
fn test_saving_past_deadline_is_missed_even_when_reached() {
    let status = derive_saving_status(date(2024, 1, 1), dec!(800), dec!(500), date(2024, 1, 2));
    assert_eq!(status, SavingStatus::Missed);
}

#[test]
fn test_saving_reached_before_deadline_is_completed() {
    let status = derive_saving_status(date(2024, 12, 31), dec!(500), dec!(500), date(2024, 6, 1));
    assert_eq!(status, SavingStatus::Completed);
}

#[test]
fn test_saving_in_progress_is_active() {
    let status = derive_saving_status(date(2024, 12, 31), dec!(100), dec!(500), date(2024, 12, 31));
    assert_eq!(status, SavingStatus::Active);
}

#[test]
fn test_status_serialization() {
    assert_eq!(
        serde_json::to_string(&DebtStatus::Overdue).unwrap(),
        "\"Overdue\""
    );
    assert_eq!(
        serde_json::to_string(&SavingStatus::Completed).unwrap(),
        "\"completed\""
    );
}

fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn rate() -> impl Strategy<Value = Decimal> {
    (0i64..5_000).prop_map(|bp| Decimal::new(bp, 2))
}

proptest! {
    /// Paid exactly when the amount paid covers principal plus interest.
    #[test]
    fn test_debt_paid_iff_covered(
        debt_amount in amount(),
        interest_rate in rate(),
        amount_paid in amount(),
        offset in -400i64..400,
    ) {
        let paying = date(2024, 6, 15);
        let today = if offset >= 0 {
            paying.checked_add_days(Days::new(offset.unsigned_abs())).unwrap()
        } else {
            paying.checked_sub_days(Days::new(offset.unsigned_abs())).unwrap()
        };
        let t = terms(debt_amount, interest_rate, paying, amount_paid);
        let status = derive_debt_status(&t, today).unwrap();

        let covered = amount_paid >= total_owed(debt_amount, interest_rate).unwrap();
        prop_assert_eq!(status == DebtStatus::Paid, covered);
        prop_assert_eq!(status == DebtStatus::Overdue, !covered && today > paying);
        prop_assert_eq!(outstanding(&t).unwrap() <= Decimal::ZERO, covered);
    }

    /// Missed exactly when the deadline has passed.
    #[test]
    fn test_saving_missed_iff_past_deadline(
        goal in amount(),
        current in amount(),
        offset in -400i64..400,
    ) {
        let deadline = date(2024, 6, 15);
        let today = if offset >= 0 {
            deadline.checked_add_days(Days::new(offset.unsigned_abs())).unwrap()
        } else {
            deadline.checked_sub_days(Days::new(offset.unsigned_abs())).unwrap()
        };
        let status = derive_saving_status(deadline, current, goal, today);

        prop_assert_eq!(status == SavingStatus::Missed, today > deadline);
        prop_assert_eq!(
            status == SavingStatus::Completed,
            today <= deadline && current >= goal
        );
    }
}
