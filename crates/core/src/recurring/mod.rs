//! Subscriptions, rent and other payments that repeat on a schedule.

pub mod service;
pub mod types;

pub use service::RecurringPaymentService;
pub use types::{
    CreateRecurringPaymentInput, NewRecurringPayment, RecurringPayment, RecurringPaymentChanges,
    RecurringSortField, UpdateRecurringPaymentInput,
};
