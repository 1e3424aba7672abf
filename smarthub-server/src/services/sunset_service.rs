use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, Time};

use crate::configs::Sunset;
use crate::errors::SunsetError;
use crate::services::clock::LocalClock;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Source of today's sunset instant for a location.
#[async_trait]
pub trait SunsetProvider: Send + Sync {
    async fn sunset_at(&self, coordinates: Coordinates) -> Result<OffsetDateTime, SunsetError>;
}

#[derive(Deserialize)]
struct SunriseSunsetBody {
    results: SunriseSunsetResults,
}

#[derive(Deserialize)]
struct SunriseSunsetResults {
    sunset: String,
}

/// Client of the sunrise-sunset.org style lookup API.
pub struct SunriseSunsetClient {
    http_client: reqwest::Client,
    endpoint: String,
}

impl SunriseSunsetClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SunsetError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;

        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(sunset: &Sunset) -> Result<Self, SunsetError> {
        Self::new(sunset.endpoint.clone(), Duration::from_secs(sunset.timeout_secs))
    }

    fn parse_body(body: &str) -> Result<OffsetDateTime, SunsetError> {
        let body: SunriseSunsetBody = serde_json::from_str(body)
            .map_err(|e| SunsetError::InvalidResponse(e.to_string()))?;

        OffsetDateTime::parse(&body.results.sunset, &Rfc3339)
            .map_err(|e| SunsetError::InvalidResponse(format!("{}: {}", body.results.sunset, e)))
    }
}

#[async_trait]
impl SunsetProvider for SunriseSunsetClient {
    async fn sunset_at(&self, coordinates: Coordinates) -> Result<OffsetDateTime, SunsetError> {
        let response = self
            .http_client
            .get(&self.endpoint)
            .query(&[
                ("lat", coordinates.latitude.to_string()),
                ("lng", coordinates.longitude.to_string()),
                ("formatted", "0".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SunsetError::UpstreamStatus(status.as_u16()));
        }

        let body = response.text().await?;

        Self::parse_body(&body)
    }
}

/// Resolves the "sunset" light trigger into a local time of day.
pub struct SunsetService {
    provider: Box<dyn SunsetProvider>,
    coordinates: Coordinates,
    clock: LocalClock,
}

impl SunsetService {
    pub fn new(provider: Box<dyn SunsetProvider>, coordinates: Coordinates, clock: LocalClock) -> Self {
        Self {
            provider,
            coordinates,
            clock,
        }
    }

    pub async fn resolve_sunset(&self) -> Result<Time, SunsetError> {
        let sunset = self.provider.sunset_at(self.coordinates).await?;
        let local = self.clock.to_local(sunset).time();

        tracing::debug!("resolved sunset {} to local time {}", sunset, local);

        // Stored times carry whole seconds only
        Ok(local.replace_nanosecond(0).unwrap_or(local))
    }
}

#[cfg(any(test, feature = "mock"))]
pub use mock::MockSunsetProvider;

#[cfg(any(test, feature = "mock"))]
mod mock {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Answers every lookup with a fixed sunset, or a fixed upstream status.
    #[derive(Clone)]
    pub struct MockSunsetProvider {
        outcome: Result<OffsetDateTime, u16>,
        calls: Arc<AtomicUsize>,
    }

    impl MockSunsetProvider {
        pub fn returning(sunset: OffsetDateTime) -> Self {
            Self {
                outcome: Ok(sunset),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub fn failing(status: u16) -> Self {
            Self {
                outcome: Err(status),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SunsetProvider for MockSunsetProvider {
        async fn sunset_at(&self, _coordinates: Coordinates) -> Result<OffsetDateTime, SunsetError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.map_err(SunsetError::UpstreamStatus)
        }
    }
}
