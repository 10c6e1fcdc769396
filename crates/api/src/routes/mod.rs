//! API route definitions.

use axum::{Router, middleware};
use chrono::{NaiveDate, Utc};

use crate::{AppState, middleware::auth::auth_middleware};

pub mod budgets;
pub mod dashboard;
pub mod debts;
pub mod health;
pub mod recurring_payments;
pub mod savings;

/// Creates the API router. Everything except `/health` sits behind the auth middleware.
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    let protected_routes = Router::new()
        .merge(budgets::routes())
        .merge(debts::routes())
        .merge(recurring_payments::routes())
        .merge(savings::routes())
        .merge(dashboard::routes())
        .layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .merge(health::routes())
        .merge(protected_routes)
}

/// The UTC calendar date statuses are derived against.
fn today() -> NaiveDate {
    Utc::now().date_naive()
}
