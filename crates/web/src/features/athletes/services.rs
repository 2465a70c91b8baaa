use sqlx::SqlitePool;
use storage::{
    dto::athlete::{
        AthleteFilter, AthleteResponse, AthleteSummary, CreateAthleteRequest, UpdateAthleteRequest,
    },
    error::{Result, StorageError},
    repository::{
        athlete::AthleteRepository, category::CategoryRepository,
        training_center::TrainingCenterRepository,
    },
};
use uuid::Uuid;

/// List athlete summaries matching the filter, in a stable order
pub async fn list_athletes(pool: &SqlitePool, filter: &AthleteFilter) -> Result<Vec<AthleteSummary>> {
    let repo = AthleteRepository::new(pool);
    repo.list(filter).await
}

/// Get athlete by id with reference names joined in
pub async fn get_athlete(pool: &SqlitePool, id: Uuid) -> Result<AthleteResponse> {
    let repo = AthleteRepository::new(pool);
    repo.find_by_id_detailed(id).await
}

/// Create a new athlete.
///
/// Both reference names must resolve to existing rows before the insert; the
/// response echoes the names as submitted.
pub async fn create_athlete(
    pool: &SqlitePool,
    request: &CreateAthleteRequest,
) -> Result<AthleteResponse> {
    let category = CategoryRepository::new(pool)
        .find_by_name(&request.category_name)
        .await?
        .ok_or_else(|| StorageError::ReferenceNotFound {
            resource: "Category",
            name: request.category_name.clone(),
        })?;

    let training_center = TrainingCenterRepository::new(pool)
        .find_by_name(&request.training_center_name)
        .await?
        .ok_or_else(|| StorageError::ReferenceNotFound {
            resource: "Training Center",
            name: request.training_center_name.clone(),
        })?;

    let repo = AthleteRepository::new(pool);
    let athlete = repo.create(request, category.id, training_center.id).await?;

    Ok(AthleteResponse::from_model(
        athlete,
        request.category_name.clone(),
        request.training_center_name.clone(),
    ))
}

/// Update an athlete
pub async fn update_athlete(
    pool: &SqlitePool,
    id: Uuid,
    request: &UpdateAthleteRequest,
) -> Result<AthleteResponse> {
    let repo = AthleteRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    repo.update(id, &existing, request).await?;

    repo.find_by_id_detailed(id).await
}

/// Delete an athlete
pub async fn delete_athlete(pool: &SqlitePool, id: Uuid) -> Result<()> {
    let repo = AthleteRepository::new(pool);
    repo.delete(id).await
}
