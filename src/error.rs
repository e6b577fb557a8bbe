//! Error types for the engine.

use thiserror::Error;

/// Errors surfaced to callers of the engine and its tooling.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid FEN: {message}")]
    InvalidFen { message: String },

    #[error("Illegal position: {message}")]
    IllegalPosition { message: String },

    /// Only standard chess and antichess are played by the bots.
    #[error("Unsupported variant: {name}")]
    UnsupportedVariant { name: String },

    /// A scoring pass produced nothing to choose from.
    #[error("Cannot select from an empty candidate list")]
    NoCandidates,

    #[error("Invalid bot spec '{spec}': {message}")]
    InvalidBotSpec { spec: String, message: String },

    #[error("Profile I/O error: {0}")]
    ProfileIo(#[from] std::io::Error),

    #[error("Profile serialization error: {0}")]
    ProfileSerialization(#[from] serde_json::Error),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Raised inside the search once its deadline has passed.
///
/// Never shown to users: the iterative-deepening driver catches it and keeps
/// the deepest completed result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("search deadline exceeded")]
pub struct SearchTimeout;
