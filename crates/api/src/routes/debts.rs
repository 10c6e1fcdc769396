//! Debt routes.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use fintrack_core::debt::{CreateDebtInput, DebtService, UpdateDebtInput};
use fintrack_core::listing::{ListQuery, ListQueryPlanner};
use fintrack_db::DebtRepository;
use fintrack_shared::types::DebtId;
use tracing::info;

use super::today;
use crate::{AppState, error::ApiResult, middleware::AuthUser};

/// Creates the debt routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/debts", get(list_debts).post(create_debt))
        .route(
            "/debts/{id}",
            get(get_debt).patch(update_debt).delete(delete_debt),
        )
}

/// GET `/debts` - Page through the caller's debts, searchable by creditor.
async fn list_debts(
    State(state): State<AppState>,
    auth: AuthUser,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(query) = query?;
    let repo = DebtRepository::new(state.connection());
    let page = ListQueryPlanner::list(&repo, auth.owner_id(), &query).await?;
    Ok(Json(page))
}

/// POST `/debts` - Record a debt. Status is derived, never taken from the body.
async fn create_debt(
    State(state): State<AppState>,
    auth: AuthUser,
    payload: Result<Json<CreateDebtInput>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(input) = payload?;
    let debt = DebtService::prepare_create(auth.owner_id(), input, today())?;

    let repo = DebtRepository::new(state.connection());
    let created = repo.create(debt).await?;

    info!(
        owner_id = %created.owner_id,
        debt_id = %created.id,
        status = created.status.as_str(),
        "Debt created"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET `/debts/{id}`
async fn get_debt(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = DebtId::parse(&id)?;
    let repo = DebtRepository::new(state.connection());
    Ok(Json(repo.find(auth.owner_id(), id).await?))
}

/// PATCH `/debts/{id}` - Change debt terms or record a payment.
async fn update_debt(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    payload: Result<Json<UpdateDebtInput>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let id = DebtId::parse(&id)?;
    let Json(input) = payload?;
    let changes = DebtService::prepare_update(input)?;

    let repo = DebtRepository::new(state.connection());
    let updated = repo.update(auth.owner_id(), id, changes, today()).await?;

    info!(
        owner_id = %updated.owner_id,
        debt_id = %updated.id,
        status = updated.status.as_str(),
        "Debt updated"
    );
    Ok(Json(updated))
}

/// DELETE `/debts/{id}`
async fn delete_debt(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = DebtId::parse(&id)?;
    let repo = DebtRepository::new(state.connection());
    repo.delete(auth.owner_id(), id).await?;

    info!(owner_id = %auth.owner_id(), debt_id = %id, "Debt deleted");
    Ok(StatusCode::NO_CONTENT)
}
