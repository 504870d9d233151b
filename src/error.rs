use thiserror::Error;

/// Main error type for the prop suggestion service
#[derive(Error, Debug)]
pub enum PropError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // Network errors
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream stats provider error: {0}")]
    Upstream(String),

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Player data errors
    #[error("Player not found: {0}")]
    PlayerNotFound(u32),

    #[error("Invalid player data: {0}")]
    InvalidPlayerData(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for PropError
pub type Result<T> = std::result::Result<T, PropError>;

impl PropError {
    /// Whether the error came from talking to the live stats provider.
    /// These are recoverable by serving fixture data instead.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            PropError::Http(_) | PropError::Upstream(_) | PropError::Json(_)
        )
    }
}
