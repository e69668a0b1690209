/// Domain-specific error types for payoff curve generation.
/// Curve generation never panics on malformed trades; it reports the shape
/// problem so the caller can fix its input.
#[derive(Debug, thiserror::Error)]
pub enum PayoffError {
    #[error("invalid trade shape: {0}")]
    InvalidTradeShape(String),

    #[error("price grid too large: {points} points exceeds limit of {limit}")]
    GridTooLarge { points: usize, limit: usize },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("config error: {0}")]
    Config(String),
}

impl PayoffError {
    /// True when the error was caused by the caller's input rather than the service.
    #[inline]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PayoffError::InvalidTradeShape(_)
                | PayoffError::GridTooLarge { .. }
                | PayoffError::Parse(_)
        )
    }
}

impl From<serde_json::Error> for PayoffError {
    fn from(e: serde_json::Error) -> Self {
        PayoffError::Parse(e.to_string())
    }
}

impl From<std::io::Error> for PayoffError {
    fn from(e: std::io::Error) -> Self {
        PayoffError::Io(e.to_string())
    }
}

pub type PayoffResult<T> = Result<T, PayoffError>;
