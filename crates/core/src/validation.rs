//! Field checks shared by the record services.
//!
//! The bounds match the storage columns: money is `NUMERIC(19, 4)`, interest rates are
//! `NUMERIC(9, 4)` and names are `VARCHAR(255)`.

use rust_decimal::Decimal;

use crate::error::{RecordError, RecordResult};

/// Money amounts must stay below 10^15.
pub(crate) const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Interest rates must stay below 10^5 percent.
pub(crate) const MAX_RATE: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

/// Decimal places kept by storage.
pub(crate) const MAX_SCALE: u32 = 4;

/// Longest stored name, in characters.
pub(crate) const MAX_TEXT_LEN: usize = 255;

/// Unwraps a required field.
pub(crate) fn require<T>(value: Option<T>, field: &'static str) -> RecordResult<T> {
    value.ok_or(RecordError::MissingField(field))
}

/// Rejects negative amounts and amounts a money column cannot hold exactly.
pub(crate) fn amount(value: Decimal, field: &'static str) -> RecordResult<Decimal> {
    bounded(non_negative(value, field)?, MAX_AMOUNT, field)
}

/// Rejects negative rates and rates the interest column cannot hold exactly.
pub(crate) fn rate(value: Decimal, field: &'static str) -> RecordResult<Decimal> {
    bounded(non_negative(value, field)?, MAX_RATE, field)
}

fn non_negative(value: Decimal, field: &'static str) -> RecordResult<Decimal> {
    if value < Decimal::ZERO {
        return Err(RecordError::NegativeAmount(field));
    }
    Ok(value)
}

fn bounded(value: Decimal, max: Decimal, field: &'static str) -> RecordResult<Decimal> {
    if value >= max {
        return Err(RecordError::invalid(field, format!("must be less than {max}")));
    }
    if value.normalize().scale() > MAX_SCALE {
        return Err(RecordError::invalid(
            field,
            format!("must have at most {MAX_SCALE} decimal places"),
        ));
    }
    Ok(value)
}

/// Rejects text longer than a name column holds.
pub(crate) fn max_len(value: String, field: &'static str) -> RecordResult<String> {
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(RecordError::invalid(
            field,
            format!("must be at most {MAX_TEXT_LEN} characters"),
        ));
    }
    Ok(value)
}

/// Trims text and rejects it when nothing is left or it is too long.
pub(crate) fn non_blank(value: &str, field: &'static str) -> RecordResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RecordError::MissingField(field));
    }
    max_len(trimmed.to_string(), field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_bounds_match_column_precision() {
        assert_eq!(MAX_AMOUNT, dec!(1000000000000000));
        assert_eq!(MAX_RATE, dec!(100000));
    }

    #[rstest]
    #[case(dec!(0))]
    #[case(dec!(0.0001))]
    #[case(dec!(12.5000000))]
    #[case(dec!(999999999999999.9999))]
    fn test_amount_accepts_storable_values(#[case] value: Decimal) {
        assert_eq!(amount(value, "amount").unwrap(), value);
    }

    #[rstest]
    #[case(dec!(1000000000000000))]
    #[case(Decimal::MAX)]
    #[case(dec!(0.00001))]
    #[case(dec!(10.12345))]
    fn test_amount_rejects_unstorable_values(#[case] value: Decimal) {
        let err = amount(value, "amount").unwrap_err();
        assert!(matches!(err, RecordError::InvalidValue { field: "amount", .. }));
    }

    #[test]
    fn test_amount_rejects_negative_first() {
        let err = amount(dec!(-0.00001), "amount").unwrap_err();
        assert!(matches!(err, RecordError::NegativeAmount("amount")));
    }

    #[rstest]
    #[case(dec!(99999.9999), true)]
    #[case(dec!(100000), false)]
    #[case(dec!(2.5), true)]
    fn test_rate_bounds(#[case] value: Decimal, #[case] ok: bool) {
        assert_eq!(rate(value, "interestRate").is_ok(), ok);
    }

    #[test]
    fn test_non_blank_limits_length_after_trimming() {
        let padded = format!("  {}  ", "a".repeat(MAX_TEXT_LEN));
        assert_eq!(non_blank(&padded, "title").unwrap().len(), MAX_TEXT_LEN);

        let long = "é".repeat(MAX_TEXT_LEN + 1);
        let err = non_blank(&long, "title").unwrap_err();
        assert!(matches!(err, RecordError::InvalidValue { field: "title", .. }));
    }
}
