pub mod api;
pub mod control;
pub mod duration;
pub mod graph;
pub mod setting;
pub mod sunset;

pub use api::ApiError;
pub use control::ControlError;
pub use duration::DurationError;
pub use graph::GraphError;
pub use setting::SettingError;
pub use sunset::SunsetError;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use uuid::Uuid;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message, error_id) = match self {
            ApiError::SettingError(e) => (e.status_code(), e.to_string(), None),
            ApiError::SunsetError(e) => {
                tracing::debug!("sunset lookup failed: {}", e);
                (e.status_code(), e.to_string(), None)
            }
            ApiError::GraphError(e) => (e.status_code(), e.to_string(), None),
            ApiError::ControlError(e @ ControlError::CorruptSetting(_)) => {
                let error_id = Uuid::new_v4();
                tracing::error!(error_id = ?error_id, "Control error: {}", e);
                (e.status_code(), "Internal server error".to_string(), Some(error_id.to_string()))
            }
            ApiError::ControlError(e) => (e.status_code(), e.to_string(), None),
            ApiError::DatabaseError(e) => {
                let error_id = Uuid::new_v4();
                tracing::error!(error_id = ?error_id, "Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Some(error_id.to_string()),
                )
            }
            ApiError::InternalError(e) => {
                let error_id = Uuid::new_v4();
                tracing::error!(error_id = ?error_id, "Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Some(error_id.to_string()),
                )
            }
        };

        let mut error_obj = json!({
            "code": status.as_u16(),
            "message": error_message
        });

        // Only internal failures carry an id to correlate with the server log
        if let Some(error_id) = error_id {
            error_obj["error_id"] = json!(error_id);
        }

        (status, Json(json!({ "error": error_obj }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    async fn body_of(error: ApiError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_user_error_has_no_error_id() {
        let (status, body) = body_of(SettingError::SettingNotFound.into()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], 404);
        assert_eq!(body["error"]["message"], "Settings not found");
        assert!(body["error"].get("error_id").is_none());
    }

    #[tokio::test]
    async fn test_duration_error_keeps_reason() {
        let error = SettingError::InvalidDuration(DurationError::InvalidFormat("1x".into()));
        let (status, body) = body_of(error.into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"].as_str().unwrap().contains("'1x'"));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_bad_gateway() {
        let (status, _) = body_of(SunsetError::UpstreamStatus(503).into()).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_internal_error_is_masked() {
        let (status, body) = body_of(anyhow::anyhow!("disk on fire").into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], "Internal server error");
        assert!(body["error"]["error_id"].is_string());
    }
}
