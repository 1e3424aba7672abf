use std::sync::Arc;

use sqlx::{Error, Pool, Sqlite};

use crate::configs::Storage;
use crate::models::Setting;

/// Access to the single active configuration.
#[derive(Clone)]
pub struct SettingRepository {
    storage: Arc<Storage>,
}

impl SettingRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub fn get_pool(&self) -> &Pool<Sqlite> {
        self.storage.get_pool()
    }
}

impl SettingRepository {
    pub async fn find_current(&self) -> Result<Option<Setting>, Error> {
        let setting: Option<Setting> = sqlx::query_as("SELECT * FROM settings WHERE slot = 1")
            .fetch_optional(self.storage.get_pool())
            .await?;

        Ok(setting)
    }

    /// Swaps in a new configuration in one statement, readers never observe
    /// an empty table once a configuration exists.
    pub async fn replace_current(&self, item: &Setting) -> Result<Setting, Error> {
        let mut tx = self.storage.get_pool().begin().await?;

        let setting: Setting = sqlx::query_as(
            r#"
            INSERT INTO settings (slot, id, user_temp, user_light, light_time_off, updated_at)
                VALUES (1, $1, $2, $3, $4, $5)
                ON CONFLICT (slot) DO UPDATE SET
                    id = excluded.id,
                    user_temp = excluded.user_temp,
                    user_light = excluded.user_light,
                    light_time_off = excluded.light_time_off,
                    updated_at = excluded.updated_at
                RETURNING *;
            "#,
        )
        .bind(&item.id)
        .bind(item.user_temp)
        .bind(&item.user_light)
        .bind(&item.light_time_off)
        .bind(item.updated_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(setting)
    }

    pub async fn count(&self) -> Result<i64, Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM settings")
            .fetch_one(self.storage.get_pool())
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;

    use crate::repositories::tests::setup_test_db;

    use super::*;

    fn sample_setting(id: &str, user_temp: f64) -> Setting {
        Setting {
            id: id.to_string(),
            user_temp,
            user_light: "14:00:00".to_string(),
            light_time_off: "16:00:00".to_string(),
            updated_at: OffsetDateTime::now_utc(),
        }
    }

    #[tokio::test]
    async fn test_find_current_when_never_configured() {
        let repo = SettingRepository::new(setup_test_db().await);

        assert!(repo.find_current().await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_replace_and_find_current() {
        let repo = SettingRepository::new(setup_test_db().await);

        let stored = repo.replace_current(&sample_setting("first", 22.5)).await.unwrap();
        assert_eq!(stored.id, "first");

        let found = repo.find_current().await.unwrap().unwrap();
        assert_eq!(found.user_temp, 22.5);
        assert_eq!(found.user_light, "14:00:00");
        assert_eq!(found.light_time_off, "16:00:00");
    }

    #[tokio::test]
    async fn test_replace_keeps_a_single_record() {
        let repo = SettingRepository::new(setup_test_db().await);

        repo.replace_current(&sample_setting("first", 20.0)).await.unwrap();
        repo.replace_current(&sample_setting("second", 25.0)).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);

        let found = repo.find_current().await.unwrap().unwrap();
        assert_eq!(found.id, "second");
        assert_eq!(found.user_temp, 25.0);
    }
}
