use std::sync::Arc;

use smarthub_api::models::SettingsRequest;
use time::{Date, PrimitiveDateTime, Time};
use uuid::Uuid;

use crate::errors::{ApiError, DurationError, SettingError};
use crate::models::Setting;
use crate::repositories::SettingRepository;
use crate::services::clock::{LocalClock, format_time_of_day, parse_time_of_day};
use crate::services::duration::{ParsedDuration, parse_duration};
use crate::services::sunset_service::SunsetService;

const SUNSET_TRIGGER: &str = "sunset";

/// A settings submission after trigger resolution and duration arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedSetting {
    pub user_temp: f64,
    pub light_on: Time,
    pub light_off: Time,
}

/// Adds `duration` to `light_on` on an arbitrary date and keeps the time of
/// day, so the result wraps past midnight.
pub fn compute_light_off(
    anchor: Date,
    light_on: Time,
    duration: ParsedDuration,
) -> Result<Time, DurationError> {
    PrimitiveDateTime::new(anchor, light_on)
        .checked_add(duration.within_day())
        .map(|moment| moment.time())
        .ok_or_else(|| DurationError::Overflow(format!("{}s", duration.total_seconds())))
}

pub struct SettingService {
    sunset_service: Arc<SunsetService>,
    setting_repository: Arc<SettingRepository>,
    clock: LocalClock,
}

impl SettingService {
    pub fn new(
        sunset_service: Arc<SunsetService>,
        setting_repository: Arc<SettingRepository>,
        clock: LocalClock,
    ) -> Self {
        Self {
            sunset_service,
            setting_repository,
            clock,
        }
    }

    pub async fn resolve_settings(
        &self,
        submission: &SettingsRequest,
    ) -> Result<ResolvedSetting, ApiError> {
        let light_on = if submission.user_light.eq_ignore_ascii_case(SUNSET_TRIGGER) {
            self.sunset_service.resolve_sunset().await?
        } else {
            parse_time_of_day(&submission.user_light)
                .ok_or_else(|| SettingError::InvalidLightTime(submission.user_light.clone()))?
        };

        let duration =
            parse_duration(&submission.light_duration).map_err(SettingError::InvalidDuration)?;

        let light_off = compute_light_off(self.clock.now().date(), light_on, duration)
            .map_err(SettingError::InvalidDuration)?;

        if light_off < light_on || duration.total_seconds() >= 86_400 {
            tracing::debug!("light window {} -> {} crosses midnight", light_on, light_off);
        }

        Ok(ResolvedSetting {
            user_temp: submission.user_temp,
            light_on,
            light_off,
        })
    }

    /// Resolves a submission and makes it the active configuration. Nothing is
    /// stored when resolution fails.
    pub async fn apply(&self, submission: &SettingsRequest) -> Result<Setting, ApiError> {
        let resolved = self.resolve_settings(submission).await?;

        let setting = Setting {
            id: Uuid::new_v4().simple().to_string(),
            user_temp: resolved.user_temp,
            user_light: format_time_of_day(resolved.light_on).map_err(anyhow::Error::from)?,
            light_time_off: format_time_of_day(resolved.light_off).map_err(anyhow::Error::from)?,
            updated_at: self.clock.now(),
        };

        let stored = self.setting_repository.replace_current(&setting).await?;

        tracing::info!(
            "settings replaced: temp {} light {} -> {}",
            stored.user_temp,
            stored.user_light,
            stored.light_time_off
        );

        Ok(stored)
    }

    pub async fn current(&self) -> Result<Setting, ApiError> {
        let setting = self
            .setting_repository
            .find_current()
            .await?
            .ok_or(SettingError::SettingNotFound)?;

        Ok(setting)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime, offset, time};

    use crate::repositories::tests::setup_test_db;
    use crate::services::sunset_service::{Coordinates, MockSunsetProvider};

    use super::*;

    async fn setup_service(provider: MockSunsetProvider) -> (SettingService, Arc<SettingRepository>) {
        let clock = LocalClock::new(offset!(-5));
        let sunset_service = Arc::new(SunsetService::new(
            Box::new(provider),
            Coordinates { latitude: 18.1096, longitude: -77.2975 },
            clock,
        ));
        let repository = Arc::new(SettingRepository::new(setup_test_db().await));

        (SettingService::new(sunset_service, repository.clone(), clock), repository)
    }

    fn request(user_light: &str, light_duration: &str) -> SettingsRequest {
        SettingsRequest {
            user_temp: 22.5,
            user_light: user_light.to_string(),
            light_duration: light_duration.to_string(),
        }
    }

    #[test]
    fn test_compute_light_off() {
        let duration = parse_duration("2h").unwrap();

        assert_eq!(
            compute_light_off(date!(2024-06-01), time!(14:00:00), duration).unwrap(),
            time!(16:00:00)
        );
    }

    #[test]
    fn test_compute_light_off_rolls_minutes_and_hours() {
        let duration = parse_duration("1m30s").unwrap();

        assert_eq!(
            compute_light_off(date!(2024-06-01), time!(10:59:45), duration).unwrap(),
            time!(11:01:15)
        );
    }

    #[test]
    fn test_compute_light_off_wraps_past_midnight() {
        let duration = parse_duration("3h").unwrap();

        assert_eq!(
            compute_light_off(date!(2024-12-31), time!(22:30:00), duration).unwrap(),
            time!(01:30:00)
        );
    }

    #[test]
    fn test_compute_light_off_with_whole_days() {
        let duration = parse_duration("49h").unwrap();

        assert_eq!(
            compute_light_off(date!(2024-06-01), time!(08:00:00), duration).unwrap(),
            time!(09:00:00)
        );
    }

    #[tokio::test]
    async fn test_resolve_explicit_light_time() {
        let provider = MockSunsetProvider::returning(datetime!(2024-06-01 23:36:45 UTC));
        let (service, _) = setup_service(provider.clone()).await;

        let resolved = service.resolve_settings(&request("14:00:00", "2h")).await.unwrap();

        assert_eq!(resolved.user_temp, 22.5);
        assert_eq!(resolved.light_on, time!(14:00:00));
        assert_eq!(resolved.light_off, time!(16:00:00));
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_resolve_sunset_case_insensitive() {
        let provider = MockSunsetProvider::returning(datetime!(2024-06-01 23:36:45 UTC));
        let (service, _) = setup_service(provider.clone()).await;

        let resolved = service.resolve_settings(&request("SunSet", "1h30m")).await.unwrap();

        assert_eq!(resolved.light_on, time!(18:36:45));
        assert_eq!(resolved.light_off, time!(20:06:45));
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_duration_turns_off_at_light_on() {
        let provider = MockSunsetProvider::failing(500);
        let (service, _) = setup_service(provider).await;

        let resolved = service.resolve_settings(&request("06:15:00", "")).await.unwrap();

        assert_eq!(resolved.light_on, resolved.light_off);
    }

    #[tokio::test]
    async fn test_rejects_malformed_light_time() {
        let (service, _) = setup_service(MockSunsetProvider::failing(500)).await;

        let result = service.resolve_settings(&request("7pm", "1h")).await;

        assert!(matches!(
            result,
            Err(ApiError::SettingError(SettingError::InvalidLightTime(_)))
        ));
    }

    #[tokio::test]
    async fn test_wraps_duration_error() {
        let (service, _) = setup_service(MockSunsetProvider::failing(500)).await;

        let result = service.resolve_settings(&request("14:00:00", "bogus")).await;

        assert!(matches!(
            result,
            Err(ApiError::SettingError(SettingError::InvalidDuration(
                DurationError::InvalidFormat(_)
            )))
        ));
    }

    #[tokio::test]
    async fn test_sunset_failure_surfaces() {
        let (service, _) = setup_service(MockSunsetProvider::failing(503)).await;

        let result = service.resolve_settings(&request("sunset", "1h")).await;

        assert!(matches!(result, Err(ApiError::SunsetError(_))));
    }

    #[tokio::test]
    async fn test_apply_persists_canonical_record() {
        let (service, repository) = setup_service(MockSunsetProvider::failing(500)).await;

        let stored = service.apply(&request("14:00:00", "2h")).await.unwrap();

        assert_eq!(stored.user_temp, 22.5);
        assert_eq!(stored.user_light, "14:00:00");
        assert_eq!(stored.light_time_off, "16:00:00");
        assert!(!stored.id.is_empty());
        assert_eq!(repository.find_current().await.unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn test_apply_replaces_previous_record() {
        let (service, repository) = setup_service(MockSunsetProvider::failing(500)).await;

        let first = service.apply(&request("14:00:00", "2h")).await.unwrap();
        let second = service.apply(&request("20:00:00", "30m")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repository.count().await.unwrap(), 1);
        assert_eq!(service.current().await.unwrap().light_time_off, "20:30:00");
    }

    #[tokio::test]
    async fn test_failed_apply_keeps_previous_record() {
        let (service, _) = setup_service(MockSunsetProvider::failing(500)).await;

        let first = service.apply(&request("14:00:00", "2h")).await.unwrap();
        assert!(service.apply(&request("14:00:00", "2x")).await.is_err());

        assert_eq!(service.current().await.unwrap(), first);
    }

    #[tokio::test]
    async fn test_current_without_settings() {
        let (service, _) = setup_service(MockSunsetProvider::failing(500)).await;

        assert!(matches!(
            service.current().await,
            Err(ApiError::SettingError(SettingError::SettingNotFound))
        ));
    }
}
