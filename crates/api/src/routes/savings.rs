//! Savings goal routes.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use fintrack_core::saving::{CreateSavingGoalInput, SavingGoalService, UpdateSavingGoalInput};
use fintrack_db::SavingGoalRepository;
use fintrack_shared::types::SavingGoalId;
use tracing::info;

use super::today;
use crate::{AppState, error::ApiResult, middleware::AuthUser};

/// Creates the savings routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/savings", get(list_saving_goals).post(create_saving_goal))
        .route(
            "/savings/{id}",
            get(get_saving_goal)
                .patch(update_saving_goal)
                .delete(delete_saving_goal),
        )
}

async fn list_saving_goals(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<impl IntoResponse> {
    let repo = SavingGoalRepository::new(state.connection());
    Ok(Json(repo.list_all(auth.owner_id()).await?))
}

async fn create_saving_goal(
    State(state): State<AppState>,
    auth: AuthUser,
    payload: Result<Json<CreateSavingGoalInput>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(input) = payload?;
    let goal = SavingGoalService::prepare_create(auth.owner_id(), input, today())?;

    let repo = SavingGoalRepository::new(state.connection());
    let created = repo.create(goal).await?;

    info!(
        owner_id = %created.owner_id,
        saving_id = %created.id,
        status = created.status.as_str(),
        "Savings goal created"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_saving_goal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = SavingGoalId::parse(&id)?;
    let repo = SavingGoalRepository::new(state.connection());
    Ok(Json(repo.find(auth.owner_id(), id).await?))
}

async fn update_saving_goal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    payload: Result<Json<UpdateSavingGoalInput>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let id = SavingGoalId::parse(&id)?;
    let Json(input) = payload?;
    let changes = SavingGoalService::prepare_update(input)?;

    let repo = SavingGoalRepository::new(state.connection());
    let updated = repo.update(auth.owner_id(), id, changes, today()).await?;

    info!(
        owner_id = %updated.owner_id,
        saving_id = %updated.id,
        status = updated.status.as_str(),
        "Savings goal updated"
    );
    Ok(Json(updated))
}

async fn delete_saving_goal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = SavingGoalId::parse(&id)?;
    let repo = SavingGoalRepository::new(state.connection());
    repo.delete(auth.owner_id(), id).await?;

    info!(owner_id = %auth.owner_id(), saving_id = %id, "Savings goal deleted");
    Ok(StatusCode::NO_CONTENT)
}
