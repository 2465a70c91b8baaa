use sqlx::SqlitePool;
use storage::{
    dto::training_center::{CreateTrainingCenterRequest, UpdateTrainingCenterRequest},
    error::Result,
    models::TrainingCenter,
    repository::training_center::TrainingCenterRepository,
};
use uuid::Uuid;

/// List all training centers
pub async fn list_training_centers(pool: &SqlitePool) -> Result<Vec<TrainingCenter>> {
    let repo = TrainingCenterRepository::new(pool);
    repo.list().await
}

/// Get training center by id
pub async fn get_training_center(pool: &SqlitePool, id: Uuid) -> Result<TrainingCenter> {
    let repo = TrainingCenterRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new training center
pub async fn create_training_center(
    pool: &SqlitePool,
    request: &CreateTrainingCenterRequest,
) -> Result<TrainingCenter> {
    let repo = TrainingCenterRepository::new(pool);
    repo.create(request).await
}

/// Update a training center
pub async fn update_training_center(
    pool: &SqlitePool,
    id: Uuid,
    request: &UpdateTrainingCenterRequest,
) -> Result<TrainingCenter> {
    let repo = TrainingCenterRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    repo.update(id, &existing, request).await
}

/// Delete a training center
pub async fn delete_training_center(pool: &SqlitePool, id: Uuid) -> Result<()> {
    let repo = TrainingCenterRepository::new(pool);
    repo.delete(id).await
}
