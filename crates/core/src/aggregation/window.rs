//! The seven-day window used for upcoming payments and deadlines.

use chrono::{Days, NaiveDate};

/// The inclusive range `[today, today + 7 days]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcomingWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl UpcomingWindow {
    /// Window length in days.
    pub const DAYS: u64 = 7;

    /// The window starting on `today`.
    #[must_use]
    pub fn starting(today: NaiveDate) -> Self {
        let end = today
            .checked_add_days(Days::new(Self::DAYS))
            .unwrap_or(NaiveDate::MAX);
        Self { start: today, end }
    }

    /// The reference date.
    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.start
    }

    /// Last day inside the window.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls in the window, both ends included.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
