//! Merges per-domain aggregates into the dashboard shape.

use chrono::{Datelike, NaiveDate};

use super::types::DashboardSummary;
use crate::aggregation::{BudgetBucket, BudgetTypeGroup, DebtFacets, RecurringFacets, SavingFacets};
use crate::budget::BudgetEntryType;

/// Output of the four domain aggregations for one owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainAggregates {
    /// Budget type groups.
    pub budgets: Vec<BudgetTypeGroup>,
    /// Debt facets.
    pub debts: DebtFacets,
    /// Recurring payment facets.
    pub recurring: RecurringFacets,
    /// Savings facets.
    pub savings: SavingFacets,
}

/// Field selection and defaulting for the dashboard.
pub struct DashboardComposer;

impl DashboardComposer {
    /// Builds the summary. `today` selects the current month for the monthly rows.
    #[must_use]
    pub fn compose(aggregates: DomainAggregates, today: NaiveDate) -> DashboardSummary {
        let DomainAggregates {
            budgets,
            debts,
            recurring,
            savings,
        } = aggregates;

        let mut summary = DashboardSummary::default();

        for group in budgets {
            let monthly = current_month(&group.details, today);
            match group.entry_type {
                BudgetEntryType::Income => {
                    summary.total_income = group.total;
                    summary.monthly_incomes = monthly;
                    summary.income_details = group.details;
                }
                BudgetEntryType::Expense => {
                    summary.total_expenses = group.total;
                    summary.monthly_expenses = monthly;
                    summary.expense_details = group.details;
                }
            }
        }

        let debt_totals = debts.total_metrics.unwrap_or_default();
        summary.total_debt = debt_totals.total_debt;
        summary.total_paid = debt_totals.total_paid;
        summary.total_outstanding = debt_totals.total_outstanding;
        summary.status_breakdown = debts.status_breakdown;
        summary.debt_by_creditor = debts.debt_by_creditor;

        let recurring_totals = recurring.total_metrics.unwrap_or_default();
        summary.total_payments = recurring_totals.total_payments;
        summary.active_payments = recurring_totals.active_payments;
        summary.expired_payments = recurring_totals.expired_payments;
        summary.payments_by_frequency = recurring.payments_by_frequency;
        summary.upcoming_payments = recurring.upcoming_payments;

        let saving_totals = savings.total_metrics.unwrap_or_default();
        summary.total_goals = saving_totals.total_goals;
        summary.total_goal_amount = saving_totals.total_goal_amount;
        summary.total_current_amount = saving_totals.total_current_amount;
        summary.monthly_savings_goal = saving_totals.total_goal_amount;
        summary.status_metrics = savings.status_metrics;
        summary.upcoming_deadlines = savings.upcoming_deadlines;

        summary
    }
}

// Matches on month only, so the same month of earlier years is included.
fn current_month(details: &[BudgetBucket], today: NaiveDate) -> Vec<BudgetBucket> {
    details
        .iter()
        .filter(|bucket| bucket.month == today.month())
        .cloned()
        .collect()
}
