use thiserror::Error;

/// Coarse classification of a [`ScoreboardError`], for callers that branch on
/// the failure category rather than the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or conflicting match creation input
    Validation,
    /// The referenced match id is not on the board
    NotFound,
    /// Malformed score input
    InvalidScore,
}

/// Every failure the scoreboard can surface to its caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreboardError {
    #[error("{0}")]
    Validation(String),

    #[error("Match not found: {id}")]
    NotFound { id: String },

    #[error("{0}")]
    InvalidScore(String),
}

impl ScoreboardError {
    pub fn validation(message: impl Into<String>) -> Self {
        ScoreboardError::Validation(message.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        ScoreboardError::NotFound { id: id.into() }
    }

    pub fn invalid_score(message: impl Into<String>) -> Self {
        ScoreboardError::InvalidScore(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ScoreboardError::Validation(_) => ErrorKind::Validation,
            ScoreboardError::NotFound { .. } => ErrorKind::NotFound,
            ScoreboardError::InvalidScore(_) => ErrorKind::InvalidScore,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreboardError>;
