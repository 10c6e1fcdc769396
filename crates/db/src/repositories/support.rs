//! Helpers shared by the record repositories.

use chrono::{DateTime, Utc};
use fintrack_core::RecordError;
use fintrack_core::listing::SortDirection;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{DbErr, Order};

/// Wraps a database failure.
pub(crate) fn db_error(err: DbErr) -> RecordError {
    RecordError::repository(err)
}

/// Current time in the column representation.
pub(crate) fn now() -> DateTimeWithTimeZone {
    Utc::now().into()
}

/// Column timestamp as UTC.
pub(crate) fn utc(ts: DateTimeWithTimeZone) -> DateTime<Utc> {
    ts.with_timezone(&Utc)
}

pub(crate) const fn order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}

/// `%text%` with LIKE metacharacters escaped, for case-insensitive substring search
/// against an already lowercased column or expression.
pub(crate) fn like_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
