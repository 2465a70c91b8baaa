use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for creating a new training center
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTrainingCenterRequest {
    #[validate(length(
        min = 1,
        max = 20,
        message = "Name must be between 1 and 20 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 60,
        message = "Address must be between 1 and 60 characters"
    ))]
    pub address: String,

    #[validate(length(
        min = 1,
        max = 50,
        message = "Owner must be between 1 and 50 characters"
    ))]
    pub owner: String,
}

/// Request payload for partially updating a training center
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTrainingCenterRequest {
    #[validate(length(min = 1, max = 20))]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrainingCenterResponse {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub owner: String,
}

impl From<crate::models::TrainingCenter> for TrainingCenterResponse {
    fn from(center: crate::models::TrainingCenter) -> Self {
        Self {
            id: center.id,
            name: center.name,
            address: center.address,
            owner: center.owner,
        }
    }
}
