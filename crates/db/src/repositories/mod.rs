//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.
//! Every query is scoped by owner.

pub mod budget_entry;
pub mod dashboard;
pub mod debt;
pub mod recurring_payment;
pub mod saving_goal;

mod support;

pub use budget_entry::BudgetEntryRepository;
pub use dashboard::DashboardRepository;
pub use debt::DebtRepository;
pub use recurring_payment::RecurringPaymentRepository;
pub use saving_goal::SavingGoalRepository;
