use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    #[error("Invalid temperature '{0}', expected a finite number")]
    InvalidTemperature(f64),

    #[error("Invalid time format '{0}', expected HH:MM:SS")]
    InvalidCurrentTime(String),

    #[error("Stored setting holds a malformed time '{0}'")]
    CorruptSetting(String),
}

impl ControlError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ControlError::InvalidTemperature(_) => StatusCode::BAD_REQUEST,
            ControlError::InvalidCurrentTime(_) => StatusCode::BAD_REQUEST,
            ControlError::CorruptSetting(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
