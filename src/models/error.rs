#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("Fetch failed: {0}")]
    FetchFailure(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    ServerRejection(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
