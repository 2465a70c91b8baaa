use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::training_center::{
        CreateTrainingCenterRequest, TrainingCenterResponse, UpdateTrainingCenterRequest,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/training-centers",
    responses(
        (status = 200, description = "List all training centers", body = Vec<TrainingCenterResponse>)
    ),
    tag = "training-centers"
)]
pub async fn list_training_centers(State(db): State<Database>) -> Result<Response, WebError> {
    let centers = services::list_training_centers(db.pool()).await?;

    let response: Vec<TrainingCenterResponse> = centers
        .into_iter()
        .map(TrainingCenterResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/training-centers/{id}",
    params(
        ("id" = Uuid, Path, description = "Training center id")
    ),
    responses(
        (status = 200, description = "Training center found", body = TrainingCenterResponse),
        (status = 404, description = "Training center not found")
    ),
    tag = "training-centers"
)]
pub async fn get_training_center(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let center = services::get_training_center(db.pool(), id).await?;

    Ok(Json(TrainingCenterResponse::from(center)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/training-centers",
    request_body = CreateTrainingCenterRequest,
    responses(
        (status = 201, description = "Training center created", body = TrainingCenterResponse),
        (status = 303, description = "Training center name already registered"),
        (status = 400, description = "Validation error")
    ),
    tag = "training-centers"
)]
pub async fn create_training_center(
    State(db): State<Database>,
    Json(req): Json<CreateTrainingCenterRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let center = services::create_training_center(db.pool(), &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(TrainingCenterResponse::from(center)),
    )
        .into_response())
}

#[utoipa::path(
    patch,
    path = "/api/training-centers/{id}",
    params(
        ("id" = Uuid, Path, description = "Training center id")
    ),
    request_body = UpdateTrainingCenterRequest,
    responses(
        (status = 200, description = "Training center updated", body = TrainingCenterResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Training center not found")
    ),
    tag = "training-centers"
)]
pub async fn update_training_center(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(update_req): Json<UpdateTrainingCenterRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_training_center(db.pool(), id, &update_req).await?;

    Ok(Json(TrainingCenterResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/training-centers/{id}",
    params(
        ("id" = Uuid, Path, description = "Training center id")
    ),
    responses(
        (status = 204, description = "Training center deleted"),
        (status = 404, description = "Training center not found"),
        (status = 409, description = "Training center still referenced by athletes")
    ),
    tag = "training-centers"
)]
pub async fn delete_training_center(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_training_center(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
