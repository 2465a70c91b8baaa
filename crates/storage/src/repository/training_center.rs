use sqlx::SqlitePool;
use uuid::Uuid;

use crate::dto::training_center::{CreateTrainingCenterRequest, UpdateTrainingCenterRequest};
use crate::error::{self, Result, StorageError};
use crate::models::TrainingCenter;

pub struct TrainingCenterRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TrainingCenterRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all training centers
    pub async fn list(&self) -> Result<Vec<TrainingCenter>> {
        let centers = sqlx::query_as::<_, TrainingCenter>(
            "SELECT id, name, address, owner FROM training_centers ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(centers)
    }

    /// Find training center by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<TrainingCenter> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            "SELECT id, name, address, owner FROM training_centers WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound {
            resource: "Training Center",
            id,
        })?;

        Ok(center)
    }

    /// Find training center by exact name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<TrainingCenter>> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            "SELECT id, name, address, owner FROM training_centers WHERE name = ?1",
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        Ok(center)
    }

    /// Create a new training center
    pub async fn create(&self, req: &CreateTrainingCenterRequest) -> Result<TrainingCenter> {
        let id = Uuid::new_v4();

        let center = sqlx::query_as::<_, TrainingCenter>(
            r#"
            INSERT INTO training_centers (id, name, address, owner)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, name, address, owner
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.address)
        .bind(&req.owner)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if error::is_unique_violation(&e) {
                return StorageError::DuplicateName {
                    resource: "Training Center",
                    name: req.name.clone(),
                };
            }
            StorageError::from(e)
        })?;

        Ok(center)
    }

    /// Update an existing training center; only the name is patchable
    pub async fn update(
        &self,
        id: Uuid,
        existing: &TrainingCenter,
        req: &UpdateTrainingCenterRequest,
    ) -> Result<TrainingCenter> {
        let name = req.name.as_ref().unwrap_or(&existing.name);

        let center = sqlx::query_as::<_, TrainingCenter>(
            r#"
            UPDATE training_centers SET name = ?2
            WHERE id = ?1
            RETURNING id, name, address, owner
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            if error::is_unique_violation(&e) {
                return StorageError::DuplicateName {
                    resource: "Training Center",
                    name: name.clone(),
                };
            }
            StorageError::from(e)
        })?
        .ok_or(StorageError::NotFound {
            resource: "Training Center",
            id,
        })?;

        Ok(center)
    }

    /// Delete a training center by ID; fails while athletes still reference it
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM training_centers WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| {
                if error::is_foreign_key_violation(&e) {
                    return StorageError::StillReferenced {
                        resource: "Training Center",
                    };
                }
                StorageError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound {
                resource: "Training Center",
                id,
            });
        }

        Ok(())
    }
}
