//! Budget entry routes.

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
use fintrack_core::budget::{BudgetEntryService, CreateBudgetEntryInput, UpdateBudgetEntryInput};
use fintrack_core::listing::{ListQuery, ListQueryPlanner};
use fintrack_db::BudgetEntryRepository;
use fintrack_shared::types::BudgetEntryId;
use tracing::info;

use crate::{AppState, error::ApiResult, middleware::AuthUser};

/// Creates the budget routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budgets", get(list_budget_entries).post(create_budget_entry))
        .route(
            "/budgets/{id}",
            get(get_budget_entry)
                .patch(update_budget_entry)
                .delete(delete_budget_entry),
        )
}

/// GET `/budgets` - Page through the caller's entries.
async fn list_budget_entries(
    State(state): State<AppState>,
    auth: AuthUser,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(query) = query?;
    let repo = BudgetEntryRepository::new(state.connection());
    let page = ListQueryPlanner::list(&repo, auth.owner_id(), &query).await?;
    Ok(Json(page))
}

/// POST `/budgets` - Record an income or expense.
async fn create_budget_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    payload: Result<Json<CreateBudgetEntryInput>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(input) = payload?;
    let entry = BudgetEntryService::prepare_create(auth.owner_id(), input)?;

    let repo = BudgetEntryRepository::new(state.connection());
    let created = repo.create(entry).await?;

    info!(
        owner_id = %created.owner_id,
        budget_id = %created.id,
        entry_type = created.entry_type.as_str(),
        "Budget entry created"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET `/budgets/{id}`
async fn get_budget_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = BudgetEntryId::parse(&id)?;
    let repo = BudgetEntryRepository::new(state.connection());
    Ok(Json(repo.find(auth.owner_id(), id).await?))
}

/// PATCH `/budgets/{id}` - Change any of type, amount and category.
async fn update_budget_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    payload: Result<Json<UpdateBudgetEntryInput>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let id = BudgetEntryId::parse(&id)?;
    let Json(input) = payload?;
    let changes = BudgetEntryService::prepare_update(input)?;

    let repo = BudgetEntryRepository::new(state.connection());
    let updated = repo.update(auth.owner_id(), id, changes).await?;

    info!(owner_id = %updated.owner_id, budget_id = %updated.id, "Budget entry updated");
    Ok(Json(updated))
}

/// DELETE `/budgets/{id}`
async fn delete_budget_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = BudgetEntryId::parse(&id)?;
    let repo = BudgetEntryRepository::new(state.connection());
    repo.delete(auth.owner_id(), id).await?;

    info!(owner_id = %auth.owner_id(), budget_id = %id, "Budget entry deleted");
    Ok(StatusCode::NO_CONTENT)
}
