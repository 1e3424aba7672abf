use serde::{Deserialize, Serialize};

/// Sensor report sent by the hub device on `GET /control`.
#[cfg_attr(feature = "docs", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "docs", into_params(parameter_in = Query))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlQuery {
    /// Measured temperature in Celsius
    pub temp: f64,
    /// Motion flag, `0` for none, anything else for motion detected
    pub motion: i32,
    /// Device wall-clock time, `HH:MM:SS`
    pub current_time: String,
}

/// Actuator states derived from the stored settings and a sensor report.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlResponse {
    pub fan: bool,
    pub light: bool,
}
