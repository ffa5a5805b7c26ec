//! Coffee CRUD handlers.
//!
//! These handlers only talk to the repository trait object in [`AppState`],
//! so they behave the same over every storage backend.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use coffeehouse_core::coffee::Coffee;

use crate::{handlers::AppError, state::AppState};

/// Turns a body rejection into a client error response.
fn rejection_response(rejection: JsonRejection) -> Response {
    let status = rejection.status();
    let message = rejection.body_text();
    tracing::warn!(status = %status, message = %message, "Rejected coffee payload");
    (status, message).into_response()
}

/// List all coffees (GET /coffees).
pub async fn list_coffees(State(state): State<AppState>) -> Result<Json<Vec<Coffee>>, AppError> {
    let coffees = state.coffee_repo.list_all().await?;

    Ok(Json(coffees))
}

/// Get a single coffee by ID (GET /coffees/{id}).
///
/// An unknown ID is not an error: it yields 204 with an empty body.
pub async fn get_coffee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    match state.coffee_repo.find_by_id(&id).await? {
        Some(coffee) => Ok(Json(coffee).into_response()),
        None => {
            tracing::debug!(coffee_id = %id, "Coffee not found");
            Ok(StatusCode::NO_CONTENT.into_response())
        }
    }
}

/// Create a coffee (POST /coffees).
///
/// Always answers 200 with the stored coffee, even when the body's ID was
/// already taken and the save replaced it.
pub async fn create_coffee(
    State(state): State<AppState>,
    payload: Result<Json<Coffee>, JsonRejection>,
) -> Result<Json<Coffee>, Response> {
    let Json(coffee) = payload.map_err(rejection_response)?;

    tracing::debug!(coffee = ?coffee, "Received create coffee request");

    let saved = state
        .coffee_repo
        .save(coffee)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    tracing::info!(coffee_id = %saved.id(), name = %saved.name(), "Created coffee");

    Ok(Json(saved))
}

/// Replace or create a coffee (PUT /coffees/{id}).
///
/// The path ID only decides the status: 200 if a coffee with that ID already
/// existed, 201 otherwise. The coffee stored is the body as sent, under the
/// body's own ID, even when it differs from the path.
pub async fn put_coffee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Coffee>, JsonRejection>,
) -> Result<(StatusCode, Json<Coffee>), Response> {
    let Json(coffee) = payload.map_err(rejection_response)?;

    tracing::debug!(coffee_id = %id, coffee = ?coffee, "Received put coffee request");

    let existed = state
        .coffee_repo
        .exists_by_id(&id)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    if coffee.id() != id {
        tracing::warn!(
            path_id = %id,
            body_id = %coffee.id(),
            "Path and body IDs differ, storing under the body ID"
        );
    }

    let saved = state
        .coffee_repo
        .save(coffee)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    let status = if existed {
        tracing::info!(coffee_id = %saved.id(), "Updated coffee");
        StatusCode::OK
    } else {
        tracing::info!(coffee_id = %saved.id(), "Created coffee");
        StatusCode::CREATED
    };

    Ok((status, Json(saved)))
}

/// Delete a coffee by ID (DELETE /coffees/{id}).
///
/// Answers 200 whether or not anything was removed.
pub async fn delete_coffee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    tracing::debug!(coffee_id = %id, "Received delete coffee request");

    state.coffee_repo.delete_by_id(&id).await?;

    tracing::info!(coffee_id = %id, "Deleted coffee");

    Ok(StatusCode::OK)
}
