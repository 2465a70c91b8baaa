use sqlx::SqlitePool;
use storage::{
    dto::category::{CreateCategoryRequest, UpdateCategoryRequest},
    error::Result,
    models::Category,
    repository::category::CategoryRepository,
};
use uuid::Uuid;

/// List all categories
pub async fn list_categories(pool: &SqlitePool) -> Result<Vec<Category>> {
    let repo = CategoryRepository::new(pool);
    repo.list().await
}

/// Get category by id
pub async fn get_category(pool: &SqlitePool, id: Uuid) -> Result<Category> {
    let repo = CategoryRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new category
pub async fn create_category(pool: &SqlitePool, request: &CreateCategoryRequest) -> Result<Category> {
    let repo = CategoryRepository::new(pool);
    repo.create(request).await
}

/// Update a category
pub async fn update_category(
    pool: &SqlitePool,
    id: Uuid,
    request: &UpdateCategoryRequest,
) -> Result<Category> {
    let repo = CategoryRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    repo.update(id, &existing, request).await
}

/// Delete a category
pub async fn delete_category(pool: &SqlitePool, id: Uuid) -> Result<()> {
    let repo = CategoryRepository::new(pool);
    repo.delete(id).await
}
