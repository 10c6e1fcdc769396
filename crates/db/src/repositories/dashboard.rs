//! Dashboard record source.

use fintrack_core::RecordResult;
use fintrack_core::budget::BudgetEntry;
use fintrack_core::dashboard::DashboardSource;
use fintrack_core::debt::Debt;
use fintrack_core::recurring::RecurringPayment;
use fintrack_core::saving::SavingGoal;
use fintrack_shared::types::UserId;
use sea_orm::DatabaseConnection;

use super::{BudgetEntryRepository, DebtRepository, RecurringPaymentRepository, SavingGoalRepository};

/// Loads every domain of one owner for the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardRepository {
    budgets: BudgetEntryRepository,
    debts: DebtRepository,
    recurring: RecurringPaymentRepository,
    savings: SavingGoalRepository,
}

impl DashboardRepository {
    /// Creates a new dashboard repository.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            budgets: BudgetEntryRepository::new(db.clone()),
            debts: DebtRepository::new(db.clone()),
            recurring: RecurringPaymentRepository::new(db.clone()),
            savings: SavingGoalRepository::new(db),
        }
    }
}

impl DashboardSource for DashboardRepository {
    async fn budget_entries(&self, owner: UserId) -> RecordResult<Vec<BudgetEntry>> {
        self.budgets.list_all(owner).await
    }

    async fn debts(&self, owner: UserId) -> RecordResult<Vec<Debt>> {
        self.debts.list_all(owner).await
    }

    async fn recurring_payments(&self, owner: UserId) -> RecordResult<Vec<RecurringPayment>> {
        self.recurring.list_all(owner).await
    }

    async fn saving_goals(&self, owner: UserId) -> RecordResult<Vec<SavingGoal>> {
        self.savings.list_all(owner).await
    }
}
