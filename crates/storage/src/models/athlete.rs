use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub id: Uuid,
    pub created_at: chrono::NaiveDateTime,
    pub name: String,
    pub cpf: String,
    pub weight: f64,
    pub height: f64,
    pub sex: String,
    pub category_id: Uuid,
    pub training_center_id: Uuid,
}
