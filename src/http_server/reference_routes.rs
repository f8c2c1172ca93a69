//! Reference Catalog HTTP Routes

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};

use crate::catalog::ReferenceValues;
use crate::store::RobotStore;

use super::errors::ApiResult;

/// Create reference catalog routes
pub fn reference_routes(store: Arc<RobotStore>) -> Router {
    Router::new()
        .route("/references", get(get_references_handler))
        .route("/references/update", post(update_references_handler))
        .with_state(store)
}

async fn get_references_handler(State(store): State<Arc<RobotStore>>) -> Json<ReferenceValues> {
    Json(store.references())
}

/// Body is a partial catalog; omitted vocabularies are left alone.
async fn update_references_handler(
    State(store): State<Arc<RobotStore>>,
    payload: Result<Json<ReferenceValues>, JsonRejection>,
) -> ApiResult<Json<ReferenceValues>> {
    let Json(new_values) = payload?;
    Ok(Json(store.update_reference_values(&new_values)))
}
