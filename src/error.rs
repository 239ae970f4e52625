//! Error types for TopRank
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using TopRankError
pub type Result<T> = std::result::Result<T, TopRankError>;

/// Unified error type for TopRank operations
#[derive(Debug, Error)]
pub enum TopRankError {
    // -------------------------------------------------------------------------
    // Collection Errors
    // -------------------------------------------------------------------------
    #[error("index {index} out of range for collection of {count} records")]
    IndexOutOfRange { index: usize, count: usize },

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Roster Errors
    // -------------------------------------------------------------------------
    #[error("roster parse error: {0}")]
    RosterParse(String),
}
