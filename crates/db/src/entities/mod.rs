//! `SeaORM` entities.

pub mod budget_entries;
pub mod debts;
pub mod recurring_payments;
pub mod saving_goals;
pub mod sea_orm_active_enums;
