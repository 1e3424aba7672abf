use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum SunsetError {
    #[error("Sunset lookup responded with status {0}")]
    UpstreamStatus(u16),

    #[error("Sunset lookup failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Sunset lookup returned an unreadable body: {0}")]
    InvalidResponse(String),
}

impl SunsetError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_GATEWAY
    }
}
