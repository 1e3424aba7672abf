use serde::{Deserialize, Serialize};
use smarthub_api::models::GraphEntry;
use time::OffsetDateTime;

use super::Table;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SensorLog {
    pub id: i64,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Whether the hub reported motion
    pub motion: bool,
    /// Assigned by the server at ingestion
    pub timestamp: OffsetDateTime,
}

impl From<SensorLog> for GraphEntry {
    fn from(log: SensorLog) -> Self {
        Self {
            temperature: log.temperature,
            presence: log.motion,
            datetime: log.timestamp,
        }
    }
}

#[derive(Clone)]
pub struct SensorLogTable;

impl Table for SensorLogTable {
    fn name(&self) -> &'static str {
        "sensor_logs"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS sensor_logs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                temperature REAL NOT NULL,
                motion BOOLEAN NOT NULL,
                timestamp TIMESTAMP NOT NULL
            );
            CREATE INDEX IF NOT EXISTS sensor_logs_timestamp_idx ON sensor_logs (timestamp);
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS sensor_logs;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec![]
    }
}
