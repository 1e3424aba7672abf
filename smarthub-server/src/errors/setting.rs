use axum::http::StatusCode;

use super::DurationError;

#[derive(Debug, thiserror::Error)]
pub enum SettingError {
    #[error("Settings not found")]
    SettingNotFound,

    #[error("Invalid light time '{0}', expected HH:MM:SS or 'sunset'")]
    InvalidLightTime(String),

    #[error("Invalid duration format: {0}")]
    InvalidDuration(#[source] DurationError),
}

impl SettingError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SettingError::SettingNotFound => StatusCode::NOT_FOUND,
            SettingError::InvalidLightTime(_) => StatusCode::BAD_REQUEST,
            SettingError::InvalidDuration(_) => StatusCode::BAD_REQUEST,
        }
    }
}
