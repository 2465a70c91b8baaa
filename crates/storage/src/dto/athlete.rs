use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Request payload for creating a new athlete
///
/// `category_name` and `training_center_name` are resolved against existing
/// rows before the insert; both must already exist.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Name must be between 1 and 50 characters"
    ))]
    pub name: String,

    #[validate(length(equal = 11, message = "CPF must be exactly 11 digits"))]
    pub cpf: String,

    #[validate(range(exclusive_min = 0.0, message = "Weight must be positive"))]
    pub weight: f64,

    #[validate(range(exclusive_min = 0.0, message = "Height must be positive"))]
    pub height: f64,

    #[validate(custom(function = "validate_sex"))]
    pub sex: String,

    #[validate(length(min = 1, max = 10))]
    pub category_name: String,

    #[validate(length(min = 1, max = 20))]
    pub training_center_name: String,
}

/// Request payload for partially updating an athlete
///
/// `id` and `created_at` never change; reference names are fixed at creation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAthleteRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,

    #[validate(length(equal = 11))]
    pub cpf: Option<String>,

    #[validate(range(exclusive_min = 0.0))]
    pub weight: Option<f64>,

    #[validate(range(exclusive_min = 0.0))]
    pub height: Option<f64>,

    #[validate(custom(function = "validate_sex"))]
    pub sex: Option<String>,
}

/// Full athlete response with denormalized reference names
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AthleteResponse {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub name: String,
    pub cpf: String,
    pub weight: f64,
    pub height: f64,
    pub sex: String,
    pub category: String,
    pub training_center: String,
}

impl AthleteResponse {
    pub fn from_model(
        athlete: crate::models::Athlete,
        category: String,
        training_center: String,
    ) -> Self {
        Self {
            id: athlete.id,
            created_at: athlete.created_at,
            name: athlete.name,
            cpf: athlete.cpf,
            weight: athlete.weight,
            height: athlete.height,
            sex: athlete.sex,
            category,
            training_center,
        }
    }
}

/// Lightweight listing projection
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AthleteSummary {
    pub name: String,
    pub category: String,
    pub training_center: String,
}

/// Query filters for the athlete listing; `name` wins when both are given
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct AthleteFilter {
    pub name: Option<String>,
    pub cpf: Option<String>,
}

// Validation helper
fn validate_sex(sex: &str) -> Result<(), validator::ValidationError> {
    const VALID_SEXES: &[&str] = &["M", "F"];

    if VALID_SEXES.contains(&sex) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_sex"))
    }
}
