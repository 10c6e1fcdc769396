//! Dashboard response types.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregation::{
    BudgetBucket, CreditorBreakdown, DebtStatusBreakdown, FrequencyBreakdown, SavingStatusCount,
    UpcomingDeadline, UpcomingPayment,
};

/// One owner's summary across budgets, debts, recurring payments and savings.
///
/// `Default` is the summary of a user with no records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Sum of all income entries.
    pub total_income: Decimal,
    /// Sum of all expense entries.
    pub total_expenses: Decimal,
    /// Sum of savings targets.
    pub monthly_savings_goal: Decimal,
    /// Expense buckets of the current month.
    pub monthly_expenses: Vec<BudgetBucket>,
    /// Income buckets of the current month.
    pub monthly_incomes: Vec<BudgetBucket>,
    /// All income buckets.
    pub income_details: Vec<BudgetBucket>,
    /// All expense buckets.
    pub expense_details: Vec<BudgetBucket>,
    /// Sum of debt principals.
    pub total_debt: Decimal,
    /// Sum of debt repayments.
    pub total_paid: Decimal,
    /// Sum of outstanding debt.
    pub total_outstanding: Decimal,
    /// Debts per status.
    pub status_breakdown: Vec<DebtStatusBreakdown>,
    /// Debts per creditor.
    pub debt_by_creditor: Vec<CreditorBreakdown>,
    /// Sum of recurring payment amounts.
    pub total_payments: Decimal,
    /// Recurring payments still running.
    pub active_payments: u64,
    /// Recurring payments that ended.
    pub expired_payments: u64,
    /// Recurring payments per frequency.
    pub payments_by_frequency: Vec<FrequencyBreakdown>,
    /// Recurring payments due in the next 7 days.
    pub upcoming_payments: Vec<UpcomingPayment>,
    /// Number of savings goals.
    pub total_goals: u64,
    /// Sum of savings targets.
    pub total_goal_amount: Decimal,
    /// Sum of amounts saved.
    pub total_current_amount: Decimal,
    /// Savings goals per status.
    pub status_metrics: Vec<SavingStatusCount>,
    /// Savings deadlines in the next 7 days.
    pub upcoming_deadlines: Vec<UpcomingDeadline>,
}
