use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use smarthub_api::models::*;

use crate::errors::{ApiError, GraphError};
use crate::repositories::SensorLogRepository;

#[derive(Clone)]
pub struct GraphState {
    pub sensor_log_repository: Arc<SensorLogRepository>,
}

pub fn graph_router(graph_state: GraphState) -> Router {
    Router::new()
        .route("/graph", get(graph))
        .with_state(graph_state)
}

#[utoipa::path(
    get,
    path = "/graph",
    tag = "graph",
    params(GraphQuery),
    responses(
        (status = 200, description = "Most recent sensor entries, oldest first", body = Vec<GraphEntry>),
        (status = 400, description = "Invalid size"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn graph(
    State(state): State<GraphState>,
    Query(query): Query<GraphQuery>,
) -> Result<Json<Vec<GraphEntry>>, ApiError> {
    let size = query.size();
    if size < 1 {
        return Err(GraphError::InvalidSize(size).into());
    }

    let entries = state
        .sensor_log_repository
        .find_latest(size)
        .await?
        .into_iter()
        .map(GraphEntry::from)
        .collect();

    Ok(Json(entries))
}
