use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use smarthub_server::app::{AppContext, create_app};
use smarthub_server::configs::{Cors, Database, SchemaManager, Storage};
use smarthub_server::repositories::{SensorLogRepository, SettingRepository};
use smarthub_server::services::{Coordinates, LocalClock, MockSunsetProvider};
use time::macros::{datetime, offset};
use tower::ServiceExt;

pub struct MockApp {
    pub router: Router,
    pub storage: Arc<Storage>,
    pub sunset_provider: MockSunsetProvider,
}

impl MockApp {
    pub async fn new() -> Self {
        // 23:36:45 UTC is 18:36:45 on the hub's -05:00 clock
        Self::with_sunset_provider(MockSunsetProvider::returning(datetime!(2024-06-01 23:36:45 UTC)))
            .await
    }

    pub async fn with_sunset_provider(sunset_provider: MockSunsetProvider) -> Self {
        let storage = Arc::new(
            Storage::new(
                Database {
                    migration_path: None,
                    clean_start: true,
                    url: String::from("sqlite::memory:"),
                    max_connections: 1,
                },
                SchemaManager::default(),
            )
            .await
            .unwrap(),
        );

        let router = create_app(AppContext {
            storage: storage.clone(),
            clock: LocalClock::new(offset!(-5)),
            sunset_provider: Box::new(sunset_provider.clone()),
            coordinates: Coordinates {
                latitude: 18.1096,
                longitude: -77.2975,
            },
            cors: Cors::default(),
        });

        Self {
            router,
            storage,
            sunset_provider,
        }
    }

    pub fn setting_repository(&self) -> SettingRepository {
        SettingRepository::new(self.storage.clone())
    }

    pub fn sensor_log_repository(&self) -> SensorLogRepository {
        SensorLogRepository::new(self.storage.clone())
    }

    pub async fn put_settings(&self, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri("/settings")
            .method(Method::PUT)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .method(Method::GET)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        let value = serde_json::from_slice(&body).unwrap_or(Value::Null);

        (status, value)
    }
}
