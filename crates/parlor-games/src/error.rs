//! Error types for game configuration.

/// Why a config was rejected, structurally or at admission time.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config payload could not be decoded for the claimed game type.
    #[error("config decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// The requested player limit is outside the game's bounds.
    #[error("player limit {requested} outside {min}..={max}")]
    PlayerLimit {
        min: usize,
        max: usize,
        requested: usize,
    },

    /// The requested board size is outside the game's bounds.
    #[error("board size {requested} outside {min}..={max}")]
    BoardSize {
        min: usize,
        max: usize,
        requested: usize,
    },

    /// The win score must be positive.
    #[error("win score must be at least 1")]
    ZeroWinScore,

    /// Admission rejected: the roster is at the configured limit.
    #[error("lobby is full ({max} players)")]
    LobbyFull { max: usize },
}
