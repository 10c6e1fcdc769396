//! Dashboard orchestration over a record source.

use std::future::Future;

use chrono::NaiveDate;
use fintrack_shared::types::UserId;

use super::composer::{DashboardComposer, DomainAggregates};
use super::types::DashboardSummary;
use crate::aggregation::{RecordAggregator, UpcomingWindow};
use crate::budget::BudgetEntry;
use crate::debt::Debt;
use crate::error::RecordResult;
use crate::recurring::RecurringPayment;
use crate::saving::SavingGoal;

/// Loads all of one owner's records per domain.
pub trait DashboardSource: Send + Sync {
    /// All budget entries of `owner`.
    fn budget_entries(
        &self,
        owner: UserId,
    ) -> impl Future<Output = RecordResult<Vec<BudgetEntry>>> + Send;

    /// All debts of `owner`.
    fn debts(&self, owner: UserId) -> impl Future<Output = RecordResult<Vec<Debt>>> + Send;

    /// All recurring payments of `owner`.
    fn recurring_payments(
        &self,
        owner: UserId,
    ) -> impl Future<Output = RecordResult<Vec<RecurringPayment>>> + Send;

    /// All savings goals of `owner`.
    fn saving_goals(
        &self,
        owner: UserId,
    ) -> impl Future<Output = RecordResult<Vec<SavingGoal>>> + Send;
}

/// Builds dashboard summaries.
pub struct DashboardService<S> {
    source: S,
}

impl<S: DashboardSource> DashboardService<S> {
    /// Creates a service reading from `source`.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Summarizes every domain for `owner` as of `today`.
    ///
    /// The four loads run concurrently. Any failed load fails the summary.
    pub async fn summarize(
        &self,
        owner: UserId,
        today: NaiveDate,
    ) -> RecordResult<DashboardSummary> {
        let (budgets, debts, recurring, savings) = tokio::try_join!(
            self.source.budget_entries(owner),
            self.source.debts(owner),
            self.source.recurring_payments(owner),
            self.source.saving_goals(owner),
        )?;

        let window = UpcomingWindow::starting(today);
        let aggregates = DomainAggregates {
            budgets: RecordAggregator::budgets(&budgets),
            debts: RecordAggregator::debts(&debts)?,
            recurring: RecordAggregator::recurring_payments(&recurring, window),
            savings: RecordAggregator::savings(&savings, window),
        };

        Ok(DashboardComposer::compose(aggregates, today))
    }
}
