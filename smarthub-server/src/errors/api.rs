use super::{ControlError, GraphError, SettingError, SunsetError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Setting error: {0}")]
    SettingError(#[from] SettingError),

    #[error("Sunset error: {0}")]
    SunsetError(#[from] SunsetError),

    #[error("Control error: {0}")]
    ControlError(#[from] ControlError),

    #[error("Graph error: {0}")]
    GraphError(#[from] GraphError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}
