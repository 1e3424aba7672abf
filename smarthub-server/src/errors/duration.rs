#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    #[error("'{0}' does not match <hours>h<minutes>m<seconds>s")]
    InvalidFormat(String),

    #[error("duration '{0}' is too large")]
    Overflow(String),
}
