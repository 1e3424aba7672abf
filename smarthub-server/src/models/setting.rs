use serde::{Deserialize, Serialize};
use smarthub_api::models::SettingsResponse;
use time::OffsetDateTime;

use super::Table;

/// The active hub configuration. The table holds at most one row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Setting {
    /// Opaque identity, regenerated on each replacement
    pub id: String,
    /// Target temperature in Celsius
    pub user_temp: f64,
    /// Light-on time of day, `HH:MM:SS`
    pub user_light: String,
    /// Light-off time of day, `HH:MM:SS`
    pub light_time_off: String,
    pub updated_at: OffsetDateTime,
}

impl From<Setting> for SettingsResponse {
    fn from(setting: Setting) -> Self {
        Self {
            id: setting.id,
            user_temp: setting.user_temp,
            user_light: setting.user_light,
            light_time_off: setting.light_time_off,
        }
    }
}

#[derive(Clone)]
pub struct SettingTable;

impl Table for SettingTable {
    fn name(&self) -> &'static str {
        "settings"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS settings (
                slot INTEGER PRIMARY KEY CHECK (slot = 1),
                id TEXT NOT NULL,
                user_temp REAL NOT NULL,
                user_light TEXT NOT NULL,
                light_time_off TEXT NOT NULL,
                updated_at TIMESTAMP NOT NULL
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS settings;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec![]
    }
}
