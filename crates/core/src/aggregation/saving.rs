//! Savings breakdowns and upcoming deadlines.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use fintrack_shared::types::SavingGoalId;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{RecordAggregator, UpcomingWindow};
use crate::saving::SavingGoal;
use crate::status::SavingStatus;

/// Overall savings totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingTotals {
    /// Number of goals.
    pub total_goals: u64,
    /// Sum of target amounts.
    pub total_goal_amount: Decimal,
    /// Sum of saved amounts.
    pub total_current_amount: Decimal,
}

/// Goals sharing a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavingStatusCount {
    /// Stored status.
    pub status: SavingStatus,
    /// Number of goals.
    pub count: u64,
}

/// A goal whose deadline falls inside the upcoming window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingDeadline {
    /// Goal ID.
    pub id: SavingGoalId,
    /// Target amount.
    pub goal_amount: Decimal,
    /// Saved so far.
    pub current_amount: Decimal,
    /// Deadline.
    pub deadline: NaiveDate,
}

/// Savings facets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingFacets {
    /// `None` when there are no goals.
    pub total_metrics: Option<SavingTotals>,
    /// Ordered by status.
    pub status_metrics: Vec<SavingStatusCount>,
    /// Ordered by deadline.
    pub upcoming_deadlines: Vec<UpcomingDeadline>,
}

impl RecordAggregator {
    /// Totals, stored-status counts and upcoming deadlines of a savings goal set.
    #[must_use]
    pub fn savings(goals: &[SavingGoal], window: UpcomingWindow) -> SavingFacets {
        if goals.is_empty() {
            return SavingFacets::default();
        }

        let mut totals = SavingTotals::default();
        let mut by_status: BTreeMap<SavingStatus, u64> = BTreeMap::new();
        let mut upcoming = Vec::new();

        for goal in goals {
            totals.total_goals += 1;
            totals.total_goal_amount += goal.goal_amount;
            totals.total_current_amount += goal.current_amount;
            *by_status.entry(goal.status).or_default() += 1;

            if window.contains(goal.deadline) {
                upcoming.push(UpcomingDeadline {
                    id: goal.id,
                    goal_amount: goal.goal_amount,
                    current_amount: goal.current_amount,
                    deadline: goal.deadline,
                });
            }
        }

        upcoming.sort_by_key(|d| (d.deadline, d.id));

        SavingFacets {
            total_metrics: Some(totals),
            status_metrics: by_status
                .into_iter()
                .map(|(status, count)| SavingStatusCount { status, count })
                .collect(),
            upcoming_deadlines: upcoming,
        }
    }
}
