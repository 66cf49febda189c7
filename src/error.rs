use thiserror::Error;

/// Main error type for the leaderboard engine
///
/// The ranking operations themselves are total; these errors only come
/// from decoding rows and loading configuration.
#[derive(Error, Debug)]
pub enum LeaderboardError {
    /// JSON decoding errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A decoded row violates the row contract
    #[error("Invalid row at index {index}: {reason}")]
    InvalidRow { index: usize, reason: String },

    /// A rank map was paired with rows it was not computed from
    #[error("Rank map covers {ranks} rows but {rows} were given")]
    RankMismatch { rows: usize, ranks: usize },

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for LeaderboardError {
    fn from(s: String) -> Self {
        LeaderboardError::Other(s)
    }
}

impl From<&str> for LeaderboardError {
    fn from(s: &str) -> Self {
        LeaderboardError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, LeaderboardError>;
