use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use smarthub_api::models::*;

use crate::errors::ApiError;
use crate::services::SettingService;

#[derive(Clone)]
pub struct SettingState {
    pub setting_service: Arc<SettingService>,
}

pub fn setting_router(setting_state: SettingState) -> Router {
    Router::new()
        .route("/settings", get(get_settings).put(put_settings))
        .with_state(setting_state)
}

#[utoipa::path(
    put,
    path = "/settings",
    tag = "settings",
    request_body = SettingsRequest,
    responses(
        (status = 200, description = "Settings stored, replacing any previous ones", body = SettingsResponse),
        (status = 400, description = "Malformed light time or duration"),
        (status = 502, description = "Sunset lookup unavailable"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn put_settings(
    State(state): State<SettingState>,
    Json(body): Json<SettingsRequest>,
) -> Result<Json<SettingsResponse>, ApiError> {
    let setting = state.setting_service.apply(&body).await?;

    Ok(Json(setting.into()))
}

#[utoipa::path(
    get,
    path = "/settings",
    tag = "settings",
    responses(
        (status = 200, description = "The active settings", body = SettingsResponse),
        (status = 404, description = "No settings configured"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_settings(
    State(state): State<SettingState>,
) -> Result<Json<SettingsResponse>, ApiError> {
    let setting = state.setting_service.current().await?;

    Ok(Json(setting.into()))
}
