//! Debt totals with status and creditor breakdowns.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::RecordAggregator;
use crate::debt::Debt;
use crate::error::RecordResult;
use crate::status::DebtStatus;

/// Overall debt totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtTotals {
    /// Sum of principals.
    pub total_debt: Decimal,
    /// Sum of amounts paid.
    pub total_paid: Decimal,
    /// Sum of outstanding balances.
    pub total_outstanding: Decimal,
}

/// Debts sharing a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtStatusBreakdown {
    /// Stored status.
    pub status: DebtStatus,
    /// Number of debts.
    pub count: u64,
    /// Sum of principals.
    pub total_debt: Decimal,
    /// Sum of outstanding balances.
    pub total_outstanding: Decimal,
}

/// Debts owed to one creditor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditorBreakdown {
    /// Creditor name.
    pub creditor: String,
    /// Sum of principals.
    pub total_debt: Decimal,
    /// Sum of outstanding balances.
    pub total_outstanding: Decimal,
    /// Sum of amounts paid.
    pub total_paid: Decimal,
}

/// Debt facets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtFacets {
    /// `None` when there are no debts.
    pub total_metrics: Option<DebtTotals>,
    /// Ordered by status.
    pub status_breakdown: Vec<DebtStatusBreakdown>,
    /// Ordered by creditor name.
    pub debt_by_creditor: Vec<CreditorBreakdown>,
}

impl RecordAggregator {
    /// Totals, per-status and per-creditor breakdowns of a debt set.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Derivation` when a balance overflows.
    pub fn debts(debts: &[Debt]) -> RecordResult<DebtFacets> {
        if debts.is_empty() {
            return Ok(DebtFacets::default());
        }

        let mut totals = DebtTotals::default();
        let mut by_status: BTreeMap<DebtStatus, DebtStatusBreakdown> = BTreeMap::new();
        let mut by_creditor: BTreeMap<&str, CreditorBreakdown> = BTreeMap::new();

        for debt in debts {
            let outstanding = debt.outstanding()?;
            totals.total_debt += debt.debt_amount;
            totals.total_paid += debt.amount_paid;
            totals.total_outstanding += outstanding;

            let status = by_status
                .entry(debt.status)
                .or_insert_with(|| DebtStatusBreakdown {
                    status: debt.status,
                    count: 0,
                    total_debt: Decimal::ZERO,
                    total_outstanding: Decimal::ZERO,
                });
            status.count += 1;
            status.total_debt += debt.debt_amount;
            status.total_outstanding += outstanding;

            let creditor = by_creditor
                .entry(debt.debt_taken_from_name.as_str())
                .or_insert_with(|| CreditorBreakdown {
                    creditor: debt.debt_taken_from_name.clone(),
                    total_debt: Decimal::ZERO,
                    total_outstanding: Decimal::ZERO,
                    total_paid: Decimal::ZERO,
                });
            creditor.total_debt += debt.debt_amount;
            creditor.total_outstanding += outstanding;
            creditor.total_paid += debt.amount_paid;
        }

        Ok(DebtFacets {
            total_metrics: Some(totals),
            status_breakdown: by_status.into_values().collect(),
            debt_by_creditor: by_creditor.into_values().collect(),
        })
    }
}
