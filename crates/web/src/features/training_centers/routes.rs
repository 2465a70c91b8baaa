use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use storage::Database;

use super::handlers::{
    create_training_center, delete_training_center, get_training_center, list_training_centers,
    update_training_center,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_training_centers))
        .route("/", post(create_training_center))
        .route("/:id", get(get_training_center))
        .route("/:id", patch(update_training_center))
        .route("/:id", delete(delete_training_center))
}
