use serde::{Deserialize, Serialize};

/// Settings submission accepted by `PUT /settings`.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsRequest {
    /// Target temperature in Celsius; the fan runs above it
    pub user_temp: f64,
    /// Light-on trigger: `"sunset"` (any case) or a clock time `HH:MM:SS`
    pub user_light: String,
    /// How long the light stays on, e.g. `"1h30m"`, `"45s"` or `""`
    pub light_duration: String,
}

/// The single active configuration as stored by the hub.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsResponse {
    /// Opaque identity of the stored record, renewed on every replacement
    #[serde(rename = "_id")]
    pub id: String,
    /// Target temperature in Celsius
    pub user_temp: f64,
    /// Resolved light-on time, `HH:MM:SS`
    pub user_light: String,
    /// Computed light-off time, `HH:MM:SS`
    pub light_time_off: String,
}
