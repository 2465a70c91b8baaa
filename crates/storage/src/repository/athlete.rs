use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::dto::athlete::{
    AthleteFilter, AthleteResponse, AthleteSummary, CreateAthleteRequest, UpdateAthleteRequest,
};
use crate::error::{self, Result, StorageError};
use crate::models::Athlete;

const ATHLETE_COLUMNS: &str =
    "id, created_at, name, cpf, weight, height, sex, category_id, training_center_id";

pub struct AthleteRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List athlete summaries, optionally filtered by exact name or CPF.
    ///
    /// At most one filter is honored; `name` takes precedence. The order is
    /// total (cpf is unique), so pages over the sequence are stable.
    pub async fn list(&self, filter: &AthleteFilter) -> Result<Vec<AthleteSummary>> {
        let base = r#"
            SELECT a.name, c.name AS category, tc.name AS training_center
            FROM athletes a
            JOIN categories c ON a.category_id = c.id
            JOIN training_centers tc ON a.training_center_id = tc.id
        "#;

        let athletes = if let Some(name) = &filter.name {
            sqlx::query_as::<_, AthleteSummary>(&format!(
                "{base} WHERE a.name = ?1 ORDER BY a.name, a.cpf"
            ))
            .bind(name)
            .fetch_all(self.pool)
            .await?
        } else if let Some(cpf) = &filter.cpf {
            sqlx::query_as::<_, AthleteSummary>(&format!(
                "{base} WHERE a.cpf = ?1 ORDER BY a.name, a.cpf"
            ))
            .bind(cpf)
            .fetch_all(self.pool)
            .await?
        } else {
            sqlx::query_as::<_, AthleteSummary>(&format!("{base} ORDER BY a.name, a.cpf"))
                .fetch_all(self.pool)
                .await?
        };

        Ok(athletes)
    }

    /// Find athlete row by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            "SELECT {ATHLETE_COLUMNS} FROM athletes WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound {
            resource: "Athlete",
            id,
        })?;

        Ok(athlete)
    }

    /// Find athlete by ID with the reference names joined in
    pub async fn find_by_id_detailed(&self, id: Uuid) -> Result<AthleteResponse> {
        let athlete = sqlx::query_as::<_, AthleteResponse>(
            r#"
            SELECT a.id, a.created_at, a.name, a.cpf, a.weight, a.height, a.sex,
                   c.name AS category, tc.name AS training_center
            FROM athletes a
            JOIN categories c ON a.category_id = c.id
            JOIN training_centers tc ON a.training_center_id = tc.id
            WHERE a.id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound {
            resource: "Athlete",
            id,
        })?;

        Ok(athlete)
    }

    /// Create a new athlete with already-resolved reference keys
    pub async fn create(
        &self,
        req: &CreateAthleteRequest,
        category_id: Uuid,
        training_center_id: Uuid,
    ) -> Result<Athlete> {
        let id = Uuid::new_v4();
        let created_at = Utc::now().naive_utc();

        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            r#"
            INSERT INTO athletes (id, created_at, name, cpf, weight, height, sex,
                                  category_id, training_center_id)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            RETURNING {ATHLETE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(created_at)
        .bind(&req.name)
        .bind(&req.cpf)
        .bind(req.weight)
        .bind(req.height)
        .bind(&req.sex)
        .bind(category_id)
        .bind(training_center_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if error::is_unique_violation(&e) {
                return StorageError::DuplicateCpf {
                    cpf: req.cpf.clone(),
                };
            }
            StorageError::from(e)
        })?;

        Ok(athlete)
    }

    /// Update an existing athlete, keeping fields absent from the request.
    ///
    /// `id`, `created_at`, and the reference keys never change.
    pub async fn update(
        &self,
        id: Uuid,
        existing: &Athlete,
        req: &UpdateAthleteRequest,
    ) -> Result<Athlete> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let cpf = req.cpf.as_ref().unwrap_or(&existing.cpf);
        let weight = req.weight.unwrap_or(existing.weight);
        let height = req.height.unwrap_or(existing.height);
        let sex = req.sex.as_ref().unwrap_or(&existing.sex);

        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            r#"
            UPDATE athletes
            SET name = ?2, cpf = ?3, weight = ?4, height = ?5, sex = ?6
            WHERE id = ?1
            RETURNING {ATHLETE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(name)
        .bind(cpf)
        .bind(weight)
        .bind(height)
        .bind(sex)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            if error::is_unique_violation(&e) {
                return StorageError::DuplicateCpf { cpf: cpf.clone() };
            }
            StorageError::from(e)
        })?
        .ok_or(StorageError::NotFound {
            resource: "Athlete",
            id,
        })?;

        Ok(athlete)
    }

    /// Delete an athlete by ID
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM athletes WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound {
                resource: "Athlete",
                id,
            });
        }

        Ok(())
    }
}
