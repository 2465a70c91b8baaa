use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;

pub mod config;
pub mod error;
pub mod features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::categories::handlers::list_categories,
        features::categories::handlers::get_category,
        features::categories::handlers::create_category,
        features::categories::handlers::update_category,
        features::categories::handlers::delete_category,
        features::training_centers::handlers::list_training_centers,
        features::training_centers::handlers::get_training_center,
        features::training_centers::handlers::create_training_center,
        features::training_centers::handlers::update_training_center,
        features::training_centers::handlers::delete_training_center,
        features::athletes::handlers::list_athletes,
        features::athletes::handlers::get_athlete,
        features::athletes::handlers::create_athlete,
        features::athletes::handlers::update_athlete,
        features::athletes::handlers::delete_athlete,
    ),
    components(
        schemas(
            storage::dto::category::CreateCategoryRequest,
            storage::dto::category::UpdateCategoryRequest,
            storage::dto::category::CategoryResponse,
            storage::dto::training_center::CreateTrainingCenterRequest,
            storage::dto::training_center::UpdateTrainingCenterRequest,
            storage::dto::training_center::TrainingCenterResponse,
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateAthleteRequest,
            storage::dto::athlete::AthleteResponse,
            storage::dto::athlete::AthleteSummary,
            storage::dto::common::PaginationMeta,
            storage::dto::common::PaginatedResponse<storage::dto::athlete::AthleteSummary>,
        )
    ),
    tags(
        (name = "categories", description = "Category endpoints"),
        (name = "training-centers", description = "Training center endpoints"),
        (name = "athletes", description = "Athlete endpoints"),
    )
)]
pub struct ApiDoc;

/// Assemble the application router over the given database handle.
pub fn app(db: Database) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/categories", features::categories::routes::routes())
        .nest(
            "/api/training-centers",
            features::training_centers::routes::routes(),
        )
        .nest("/api/athletes", features::athletes::routes::routes())
        .layer(cors)
        .with_state(db)
}
