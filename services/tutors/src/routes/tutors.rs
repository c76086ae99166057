//! Tutor profile handlers

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};
use common::store::parse_object_id;
use serde_json::Value;
use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    models::{
        DeleteResponse, EmailQuery, InsertAck, UpdateAck, UpdateResponse, document_to_json,
        json_to_document, tutor::TutorUpdate,
    },
    state::AppState,
};

/// Create a tutor from the request body as given
pub async fn create_tutor(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<InsertAck>> {
    let Json(body) = payload?;
    let tutor = json_to_document(body)?;
    let inserted_id = state.tutor_repository.create(tutor).await?;

    info!("Created tutor: {}", inserted_id);
    Ok(Json(InsertAck::new(inserted_id)))
}

/// Get all tutors
pub async fn get_tutors(State(state): State<AppState>) -> ApiResult<Json<Vec<Value>>> {
    let tutors = state.tutor_repository.get_all().await?;
    Ok(Json(tutors.into_iter().map(document_to_json).collect()))
}

/// Get one tutor by email, or `null`
///
/// Without an `email` parameter the answer is `null` and the store is not
/// queried; tutors stored without an `email` field are never returned here.
pub async fn get_tutor_by_email(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> ApiResult<Json<Value>> {
    let Some(email) = query.email() else {
        return Ok(Json(Value::Null));
    };

    let tutor = state.tutor_repository.find_by_email(email).await?;
    Ok(Json(tutor.map(document_to_json).unwrap_or(Value::Null)))
}

/// Get a tutor by ID, or `null`
pub async fn get_tutor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let tutor = state.tutor_repository.find_by_id(&id).await?;
    Ok(Json(tutor.map(document_to_json).unwrap_or(Value::Null)))
}

/// Update the editable fields of a tutor
pub async fn update_tutor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TutorUpdate>, JsonRejection>,
) -> ApiResult<Json<UpdateResponse>> {
    // The id is checked before the body so a bad id is always a 400.
    parse_object_id(&id)?;
    let Json(update) = payload?;

    let outcome = state
        .tutor_repository
        .update(&id, update.into_fields()?)
        .await?;

    if outcome.matched_count == 0 {
        return Err(ApiError::NotFound("Tutor not found".to_string()));
    }

    Ok(Json(UpdateResponse {
        success: true,
        result: UpdateAck {
            acknowledged: true,
            matched_count: outcome.matched_count,
            modified_count: outcome.modified_count,
            upserted_id: None,
            upserted_count: 0,
        },
    }))
}

/// Delete a tutor by ID
pub async fn delete_tutor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let deleted_count = state.tutor_repository.delete(&id).await?;

    if deleted_count == 0 {
        return Err(ApiError::NotFound("Tutor not found".to_string()));
    }

    Ok(Json(DeleteResponse {
        success: true,
        deleted_count,
    }))
}
