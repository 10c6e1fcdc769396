//! Recurring payment breakdowns and the upcoming payments list.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use fintrack_shared::types::RecurringPaymentId;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{RecordAggregator, UpcomingWindow};
use crate::recurring::RecurringPayment;
use crate::schedule::Frequency;

/// Overall recurring payment totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringTotals {
    /// Sum of per-occurrence amounts.
    pub total_payments: Decimal,
    /// Payments without an end date or ending after today.
    pub active_payments: u64,
    /// Payments that ended today or earlier.
    pub expired_payments: u64,
}

/// Payments sharing a frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyBreakdown {
    /// Frequency.
    pub frequency: Frequency,
    /// Number of payments.
    pub count: u64,
    /// Sum of amounts.
    pub total_amount: Decimal,
}

/// A payment due inside the upcoming window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingPayment {
    /// Payment ID.
    pub id: RecurringPaymentId,
    /// Title.
    pub title: String,
    /// Amount.
    pub amount: Decimal,
    /// Next occurrence.
    pub next_payment_date: NaiveDate,
    /// Frequency.
    pub frequency: Frequency,
}

/// Recurring payment facets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringFacets {
    /// `None` when there are no payments.
    pub total_metrics: Option<RecurringTotals>,
    /// Ordered by frequency.
    pub payments_by_frequency: Vec<FrequencyBreakdown>,
    /// Ordered by next payment date.
    pub upcoming_payments: Vec<UpcomingPayment>,
}

impl RecordAggregator {
    /// Totals, per-frequency breakdown and upcoming payments of a recurring payment set.
    #[must_use]
    pub fn recurring_payments(
        payments: &[RecurringPayment],
        window: UpcomingWindow,
    ) -> RecurringFacets {
        if payments.is_empty() {
            return RecurringFacets::default();
        }

        let mut totals = RecurringTotals::default();
        let mut by_frequency: BTreeMap<Frequency, FrequencyBreakdown> = BTreeMap::new();
        let mut upcoming = Vec::new();

        for payment in payments {
            totals.total_payments += payment.amount;
            if payment.is_active(window.today()) {
                totals.active_payments += 1;
            } else {
                totals.expired_payments += 1;
            }

            let group = by_frequency
                .entry(payment.frequency)
                .or_insert_with(|| FrequencyBreakdown {
                    frequency: payment.frequency,
                    count: 0,
                    total_amount: Decimal::ZERO,
                });
            group.count += 1;
            group.total_amount += payment.amount;

            if window.contains(payment.next_payment_date) {
                upcoming.push(UpcomingPayment {
                    id: payment.id,
                    title: payment.title.clone(),
                    amount: payment.amount,
                    next_payment_date: payment.next_payment_date,
                    frequency: payment.frequency,
                });
            }
        }

        upcoming.sort_by_key(|p| (p.next_payment_date, p.id));

        RecurringFacets {
            total_metrics: Some(totals),
            payments_by_frequency: by_frequency.into_values().collect(),
            upcoming_payments: upcoming,
        }
    }
}
