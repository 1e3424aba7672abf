use std::sync::Arc;

use sqlx::{Error, Pool, Sqlite};

use crate::configs::Storage;
use crate::models::SensorLog;

/// Append-only history of sensor reports.
#[derive(Clone)]
pub struct SensorLogRepository {
    storage: Arc<Storage>,
}

impl SensorLogRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub fn get_pool(&self) -> &Pool<Sqlite> {
        self.storage.get_pool()
    }
}

impl SensorLogRepository {
    // Append a sensor report, the id of the item is ignored
    pub async fn create(&self, item: &SensorLog) -> Result<i64, Error> {
        let id = sqlx::query(
            r#"
            INSERT INTO sensor_logs (temperature, motion, timestamp)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(item.temperature)
        .bind(item.motion)
        .bind(item.timestamp)
        .execute(self.storage.get_pool())
        .await?
        .last_insert_rowid();

        Ok(id)
    }

    // Latest `limit` entries, oldest first. Ids follow ingestion order, stored
    // timestamp text does not once the configured offset changes.
    pub async fn find_latest(&self, limit: i64) -> Result<Vec<SensorLog>, Error> {
        let mut logs: Vec<SensorLog> = sqlx::query_as(
            r#"
            SELECT * FROM sensor_logs
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.storage.get_pool())
        .await?;

        logs.reverse();

        Ok(logs)
    }

    pub async fn count(&self) -> Result<i64, Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sensor_logs")
            .fetch_one(self.storage.get_pool())
            .await?;

        Ok(count)
    }
}
