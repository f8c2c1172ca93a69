//! Robot HTTP Routes
//!
//! CRUD endpoints over the robot store. Each handler performs exactly one
//! store operation, so each request takes the store lock once.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use crate::store::{Robot, RobotFilter, RobotStore};

use super::errors::ApiResult;

/// Query string accepted by `GET /robots`
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub model: Option<String>,
    /// Comma-separated techs; a robot must carry all of them
    pub tech: Option<String>,
}

impl ListQuery {
    /// Collects `model` and `tech` from raw pairs. A repeated key keeps its
    /// first value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "model" => &mut query.model,
                "tech" => &mut query.tech,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    pub fn to_filter(&self) -> RobotFilter {
        RobotFilter::from_query(self.model.as_deref(), self.tech.as_deref())
    }
}

/// Create robot routes
pub fn robot_routes(store: Arc<RobotStore>) -> Router {
    Router::new()
        .route("/robots", get(list_robots_handler).post(create_robot_handler))
        .route(
            "/robots/:code",
            get(get_robot_handler)
                .put(update_robot_handler)
                .delete(delete_robot_handler),
        )
        .with_state(store)
}

async fn list_robots_handler(
    State(store): State<Arc<RobotStore>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<Robot>> {
    let query = ListQuery::from_pairs(pairs);
    Json(store.list(&query.to_filter()))
}

async fn create_robot_handler(
    State(store): State<Arc<RobotStore>>,
    payload: Result<Json<Robot>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Robot>)> {
    let Json(robot) = payload?;
    let created = store.create(robot)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_robot_handler(
    State(store): State<Arc<RobotStore>>,
    Path(code): Path<String>,
) -> ApiResult<Json<Robot>> {
    Ok(Json(store.get(&code)?))
}

async fn update_robot_handler(
    State(store): State<Arc<RobotStore>>,
    Path(code): Path<String>,
    payload: Result<Json<Robot>, JsonRejection>,
) -> ApiResult<Json<Robot>> {
    let Json(robot) = payload?;
    Ok(Json(store.replace(&code, robot)?))
}

async fn delete_robot_handler(
    State(store): State<Arc<RobotStore>>,
    Path(code): Path<String>,
) -> ApiResult<StatusCode> {
    store.remove(&code)?;
    Ok(StatusCode::NO_CONTENT)
}
