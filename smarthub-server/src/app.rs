use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::configs::{Cors, SchemaManager, Settings, Storage};
use crate::docs::docs_router;
use crate::handles::*;
use crate::repositories::{SensorLogRepository, SettingRepository};
use crate::services::{
    Coordinates, LocalClock, SettingService, SunriseSunsetClient, SunsetProvider, SunsetService,
};

/// Shared services behind the HTTP surface.
pub struct AppContext {
    pub storage: Arc<Storage>,
    pub clock: LocalClock,
    pub sunset_provider: Box<dyn SunsetProvider>,
    pub coordinates: Coordinates,
    pub cors: Cors,
}

impl AppContext {
    pub async fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let storage = Arc::new(
            Storage::new(settings.database.clone(), SchemaManager::default()).await?,
        );
        let clock = LocalClock::from_config(&settings.clock)?;
        let sunset_provider = Box::new(SunriseSunsetClient::from_config(&settings.sunset)?);

        tracing::info!("local clock offset is {}", clock.now().offset());

        Ok(Self {
            storage,
            clock,
            sunset_provider,
            coordinates: Coordinates {
                latitude: settings.sunset.latitude,
                longitude: settings.sunset.longitude,
            },
            cors: settings.cors.clone(),
        })
    }
}

fn cors_layer(cors: &Cors) -> CorsLayer {
    if cors.allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("ignore invalid cors origin {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn create_app(context: AppContext) -> Router {
    let setting_repository = Arc::new(SettingRepository::new(context.storage.clone()));
    let sensor_log_repository = Arc::new(SensorLogRepository::new(context.storage.clone()));

    let sunset_service = Arc::new(SunsetService::new(
        context.sunset_provider,
        context.coordinates,
        context.clock,
    ));
    let setting_service = Arc::new(SettingService::new(
        sunset_service,
        setting_repository.clone(),
        context.clock,
    ));

    Router::new()
        .merge(setting_router(SettingState {
            setting_service: setting_service.clone(),
        }))
        .merge(control_router(ControlState {
            setting_repository: setting_repository.clone(),
            sensor_log_repository: sensor_log_repository.clone(),
            clock: context.clock,
        }))
        .merge(graph_router(GraphState {
            sensor_log_repository: sensor_log_repository.clone(),
        }))
        .merge(docs_router())
        .layer(cors_layer(&context.cors))
        .layer(TraceLayer::new_for_http())
}
