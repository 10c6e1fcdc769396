//! Savings goals.

pub mod service;
pub mod types;

pub use service::SavingGoalService;
pub use types::{
    CreateSavingGoalInput, NewSavingGoal, SavingGoal, SavingGoalChanges, SavingSortField,
    UpdateSavingGoalInput,
};
