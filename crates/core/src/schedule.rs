//! Next occurrence of a recurring payment.
//!
//! Month and year steps keep the day of month when it exists in the target
//! month and clamp to the last day otherwise (Jan 31 + 1 month = Feb 28/29).

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How often a recurring payment repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Every day.
    Daily,
    /// Every 7 days.
    Weekly,
    /// Same day next month.
    Monthly,
    /// Same day next year.
    Yearly,
}

impl Frequency {
    /// All frequencies in declaration order.
    pub const ALL: [Self; 4] = [Self::Daily, Self::Weekly, Self::Monthly, Self::Yearly];

    /// Returns the frequency as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scheduling errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The next occurrence is past the representable calendar.
    #[error("{frequency} occurrence after {start} is outside the supported date range")]
    OutOfRange {
        /// Date the step started from.
        start: NaiveDate,
        /// Step size.
        frequency: Frequency,
    },
}

/// Computes the first occurrence after `start`.
///
/// # Errors
///
/// Returns `ScheduleError::OutOfRange` if the result would overflow the calendar.
pub fn next_occurrence(start: NaiveDate, frequency: Frequency) -> Result<NaiveDate, ScheduleError> {
    let next = match frequency {
        Frequency::Daily => start.checked_add_days(Days::new(1)),
        Frequency::Weekly => start.checked_add_days(Days::new(7)),
        Frequency::Monthly => start.checked_add_months(Months::new(1)),
        Frequency::Yearly => start.checked_add_months(Months::new(12)),
    };
    next.ok_or(ScheduleError::OutOfRange { start, frequency })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(date(2024, 1, 15), Frequency::Daily, date(2024, 1, 16))]
    #[case(date(2024, 12, 31), Frequency::Daily, date(2025, 1, 1))]
    #[case(date(2024, 1, 15), Frequency::Weekly, date(2024, 1, 22))]
    #[case(date(2024, 2, 26), Frequency::Weekly, date(2024, 3, 4))]
    #[case(date(2024, 1, 15), Frequency::Monthly, date(2024, 2, 15))]
    #[case(date(2024, 1, 31), Frequency::Monthly, date(2024, 2, 29))]
    #[case(date(2023, 1, 31), Frequency::Monthly, date(2023, 2, 28))]
    #[case(date(2024, 12, 10), Frequency::Monthly, date(2025, 1, 10))]
    #[case(date(2024, 1, 15), Frequency::Yearly, date(2025, 1, 15))]
    #[case(date(2024, 2, 29), Frequency::Yearly, date(2025, 2, 28))]
    fn test_next_occurrence(
        #[case] start: NaiveDate,
        #[case] frequency: Frequency,
        #[case] expected: NaiveDate,
    ) {
        assert_eq!(next_occurrence(start, frequency).unwrap(), expected);
    }

    #[test]
    fn test_next_occurrence_overflow() {
        let err = next_occurrence(NaiveDate::MAX, Frequency::Daily).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::OutOfRange {
                start: NaiveDate::MAX,
                frequency: Frequency::Daily
            }
        );
    }

    #[test]
    fn test_next_occurrence_is_always_later() {
        let start = date(2024, 3, 31);
        for frequency in Frequency::ALL {
            assert!(next_occurrence(start, frequency).unwrap() > start);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Frequency::Monthly).unwrap(),
            "\"monthly\""
        );
        let parsed: Frequency = serde_json::from_str("\"weekly\"").unwrap();
        assert_eq!(parsed, Frequency::Weekly);
    }
}
