//! Dashboard routes.

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use fintrack_core::dashboard::DashboardService;
use fintrack_db::DashboardRepository;
use tracing::debug;

use super::today;
use crate::{AppState, error::ApiResult, middleware::AuthUser};

/// Creates the dashboard routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(get_dashboard))
}

/// GET `/dashboard` - Totals and breakdowns across every domain.
///
/// A failing domain load fails the whole response.
async fn get_dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<impl IntoResponse> {
    let today = today();
    debug!(owner_id = %auth.owner_id(), %today, "Composing dashboard");

    let service = DashboardService::new(DashboardRepository::new(state.connection()));
    let summary = service.summarize(auth.owner_id(), today).await?;
    Ok(Json(summary))
}
