use axum::routing::get;
use axum::{Json, Router};
use smarthub_api::models::*;
use utoipa::OpenApi;

use crate::handles::*;

#[derive(OpenApi)]
#[openapi(
    info(title = "Smart Hub", description = "Settings, actuator control and sensor history of the home hub"),
    paths(put_settings, get_settings, control, graph),
    components(schemas(SettingsRequest, SettingsResponse, ControlResponse, GraphEntry)),
    tags(
        (name = "settings", description = "Active hub configuration"),
        (name = "control", description = "Sensor reports and actuator decisions"),
        (name = "graph", description = "Sensor history")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}
