use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Invalid size {0}, expected a positive number of entries")]
    InvalidSize(i64),
}

impl GraphError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GraphError::InvalidSize(_) => StatusCode::BAD_REQUEST,
        }
    }
}
