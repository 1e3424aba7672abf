use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use smarthub_api::models::*;

use crate::errors::{ApiError, ControlError, SettingError};
use crate::models::SensorLog;
use crate::repositories::{SensorLogRepository, SettingRepository};
use crate::services::{ActuatorService, LocalClock};

#[derive(Clone)]
pub struct ControlState {
    pub setting_repository: Arc<SettingRepository>,
    pub sensor_log_repository: Arc<SensorLogRepository>,
    pub clock: LocalClock,
}

pub fn control_router(control_state: ControlState) -> Router {
    Router::new()
        .route("/control", get(control))
        .with_state(control_state)
}

#[utoipa::path(
    get,
    path = "/control",
    tag = "control",
    params(ControlQuery),
    responses(
        (status = 200, description = "Actuator states for the report", body = ControlResponse),
        (status = 400, description = "Non-finite temperature or malformed current time"),
        (status = 404, description = "No settings configured"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn control(
    State(state): State<ControlState>,
    Query(query): Query<ControlQuery>,
) -> Result<Json<ControlResponse>, ApiError> {
    // NaN and infinities cannot be stored or charted
    if !query.temp.is_finite() {
        return Err(ControlError::InvalidTemperature(query.temp).into());
    }

    let motion = query.motion != 0;

    // The report is kept even when no decision can be made
    state
        .sensor_log_repository
        .create(&SensorLog {
            id: 0,
            temperature: query.temp,
            motion,
            timestamp: state.clock.now(),
        })
        .await?;

    let setting = state
        .setting_repository
        .find_current()
        .await?
        .ok_or(SettingError::SettingNotFound)?;

    let actuators = ActuatorService::evaluate(&setting, query.temp, motion, &query.current_time)?;

    tracing::debug!(
        "report temp {} motion {} at {}: fan {} light {}",
        query.temp,
        motion,
        query.current_time,
        actuators.fan_on,
        actuators.light_on
    );

    Ok(Json(actuators.into()))
}
