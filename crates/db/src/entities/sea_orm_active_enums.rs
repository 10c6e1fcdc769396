//! Postgres enum types.

use fintrack_core::budget::BudgetEntryType as CoreEntryType;
use fintrack_core::schedule::Frequency as CoreFrequency;
use fintrack_core::status::{DebtStatus as CoreDebtStatus, SavingStatus as CoreSavingStatus};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "budget_entry_type")]
pub enum BudgetEntryType {
    #[sea_orm(string_value = "income")]
    Income,
    #[sea_orm(string_value = "expense")]
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "debt_status")]
pub enum DebtStatus {
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "Paid")]
    Paid,
    #[sea_orm(string_value = "Overdue")]
    Overdue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "payment_frequency")]
pub enum PaymentFrequency {
    #[sea_orm(string_value = "daily")]
    Daily,
    #[sea_orm(string_value = "weekly")]
    Weekly,
    #[sea_orm(string_value = "monthly")]
    Monthly,
    #[sea_orm(string_value = "yearly")]
    Yearly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "saving_status")]
pub enum SavingStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "missed")]
    Missed,
    #[sea_orm(string_value = "completed")]
    Completed,
}

impl From<CoreEntryType> for BudgetEntryType {
    fn from(value: CoreEntryType) -> Self {
        match value {
            CoreEntryType::Income => Self::Income,
            CoreEntryType::Expense => Self::Expense,
        }
    }
}

impl From<BudgetEntryType> for CoreEntryType {
    fn from(value: BudgetEntryType) -> Self {
        match value {
            BudgetEntryType::Income => Self::Income,
            BudgetEntryType::Expense => Self::Expense,
        }
    }
}

impl From<CoreDebtStatus> for DebtStatus {
    fn from(value: CoreDebtStatus) -> Self {
        match value {
            CoreDebtStatus::Pending => Self::Pending,
            CoreDebtStatus::Paid => Self::Paid,
            CoreDebtStatus::Overdue => Self::Overdue,
        }
    }
}

impl From<DebtStatus> for CoreDebtStatus {
    fn from(value: DebtStatus) -> Self {
        match value {
            DebtStatus::Pending => Self::Pending,
            DebtStatus::Paid => Self::Paid,
            DebtStatus::Overdue => Self::Overdue,
        }
    }
}

impl From<CoreFrequency> for PaymentFrequency {
    fn from(value: CoreFrequency) -> Self {
        match value {
            CoreFrequency::Daily => Self::Daily,
            CoreFrequency::Weekly => Self::Weekly,
            CoreFrequency::Monthly => Self::Monthly,
            CoreFrequency::Yearly => Self::Yearly,
        }
    }
}

impl From<PaymentFrequency> for CoreFrequency {
    fn from(value: PaymentFrequency) -> Self {
        match value {
            PaymentFrequency::Daily => Self::Daily,
            PaymentFrequency::Weekly => Self::Weekly,
            PaymentFrequency::Monthly => Self::Monthly,
            PaymentFrequency::Yearly => Self::Yearly,
        }
    }
}

impl From<CoreSavingStatus> for SavingStatus {
    fn from(value: CoreSavingStatus) -> Self {
        match value {
            CoreSavingStatus::Active => Self::Active,
            CoreSavingStatus::Missed => Self::Missed,
            CoreSavingStatus::Completed => Self::Completed,
        }
    }
}

impl From<SavingStatus> for CoreSavingStatus {
    fn from(value: SavingStatus) -> Self {
        match value {
            SavingStatus::Active => Self::Active,
            SavingStatus::Missed => Self::Missed,
            SavingStatus::Completed => Self::Completed,
        }
    }
}
