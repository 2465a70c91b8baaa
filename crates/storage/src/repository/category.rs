use sqlx::SqlitePool;
use uuid::Uuid;

use crate::dto::category::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::error::{self, Result, StorageError};
use crate::models::Category;

pub struct CategoryRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all categories
    pub async fn list(&self) -> Result<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY name")
                .fetch_all(self.pool)
                .await?;

        Ok(categories)
    }

    /// Find category by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Category> {
        let category =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = ?1")
                .bind(id)
                .fetch_optional(self.pool)
                .await?
                .ok_or(StorageError::NotFound {
                    resource: "Category",
                    id,
                })?;

        Ok(category)
    }

    /// Find category by exact name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE name = ?1")
                .bind(name)
                .fetch_optional(self.pool)
                .await?;

        Ok(category)
    }

    /// Create a new category
    pub async fn create(&self, req: &CreateCategoryRequest) -> Result<Category> {
        let id = Uuid::new_v4();

        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (id, name) VALUES (?1, ?2) RETURNING id, name",
        )
        .bind(id)
        .bind(&req.name)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if error::is_unique_violation(&e) {
                return StorageError::DuplicateName {
                    resource: "Category",
                    name: req.name.clone(),
                };
            }
            StorageError::from(e)
        })?;

        Ok(category)
    }

    /// Update an existing category, keeping fields absent from the request
    pub async fn update(
        &self,
        id: Uuid,
        existing: &Category,
        req: &UpdateCategoryRequest,
    ) -> Result<Category> {
        let name = req.name.as_ref().unwrap_or(&existing.name);

        let category = sqlx::query_as::<_, Category>(
            "UPDATE categories SET name = ?2 WHERE id = ?1 RETURNING id, name",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            if error::is_unique_violation(&e) {
                return StorageError::DuplicateName {
                    resource: "Category",
                    name: name.clone(),
                };
            }
            StorageError::from(e)
        })?
        .ok_or(StorageError::NotFound {
            resource: "Category",
            id,
        })?;

        Ok(category)
    }

    /// Delete a category by ID; fails while athletes still reference it
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| {
                if error::is_foreign_key_violation(&e) {
                    return StorageError::StillReferenced {
                        resource: "Category",
                    };
                }
                StorageError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound {
                resource: "Category",
                id,
            });
        }

        Ok(())
    }
}
