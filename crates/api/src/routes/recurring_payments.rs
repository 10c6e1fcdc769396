//! Recurring payment routes.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use fintrack_core::recurring::{
    CreateRecurringPaymentInput, RecurringPaymentService, UpdateRecurringPaymentInput,
};
use fintrack_db::RecurringPaymentRepository;
use fintrack_shared::types::RecurringPaymentId;
use tracing::info;

use crate::{AppState, error::ApiResult, middleware::AuthUser};

/// Creates the recurring payment routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/recurring-payments",
            get(list_recurring_payments).post(create_recurring_payment),
        )
        .route(
            "/recurring-payments/{id}",
            get(get_recurring_payment)
                .patch(update_recurring_payment)
                .delete(delete_recurring_payment),
        )
}

/// GET `/recurring-payments` - All of the caller's payments, newest first.
async fn list_recurring_payments(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<impl IntoResponse> {
    let repo = RecurringPaymentRepository::new(state.connection());
    Ok(Json(repo.list_all(auth.owner_id()).await?))
}

/// POST `/recurring-payments` - Schedule a payment.
async fn create_recurring_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    payload: Result<Json<CreateRecurringPaymentInput>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(input) = payload?;
    let payment = RecurringPaymentService::prepare_create(auth.owner_id(), input)?;

    let repo = RecurringPaymentRepository::new(state.connection());
    let created = repo.create(payment).await?;

    info!(
        owner_id = %created.owner_id,
        payment_id = %created.id,
        frequency = %created.frequency,
        next_payment_date = %created.next_payment_date,
        "Recurring payment created"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET `/recurring-payments/{id}`
async fn get_recurring_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = RecurringPaymentId::parse(&id)?;
    let repo = RecurringPaymentRepository::new(state.connection());
    Ok(Json(repo.find(auth.owner_id(), id).await?))
}

/// PATCH `/recurring-payments/{id}` - The next payment date is left as stored.
async fn update_recurring_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    payload: Result<Json<UpdateRecurringPaymentInput>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let id = RecurringPaymentId::parse(&id)?;
    let Json(input) = payload?;
    let changes = RecurringPaymentService::prepare_update(input)?;

    let repo = RecurringPaymentRepository::new(state.connection());
    let updated = repo.update(auth.owner_id(), id, changes).await?;

    info!(owner_id = %updated.owner_id, payment_id = %updated.id, "Recurring payment updated");
    Ok(Json(updated))
}

/// DELETE `/recurring-payments/{id}`
async fn delete_recurring_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = RecurringPaymentId::parse(&id)?;
    let repo = RecurringPaymentRepository::new(state.connection());
    repo.delete(auth.owner_id(), id).await?;

    info!(owner_id = %auth.owner_id(), payment_id = %id, "Recurring payment deleted");
    Ok(StatusCode::NO_CONTENT)
}
