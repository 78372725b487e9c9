use thiserror::Error;

/// Why a message that looked like a share could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Missing result line")]
    MissingResult,

    #[error("Invalid attempt count: {0}")]
    InvalidAttempts(String),

    #[error("Attempt limit mismatch: expected /{expected}, found /{found}")]
    LimitMismatch { expected: u32, found: u32 },

    #[error("Expected {expected} sub-puzzle results, found {found}")]
    MissingSubScores { expected: usize, found: usize },

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid puzzle number: {0}")]
    InvalidPuzzleNumber(String),
}
