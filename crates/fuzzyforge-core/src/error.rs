//! Error types for FuzzyForge

use thiserror::Error;

/// Main error type for FuzzyForge operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FuzzyForgeError {
    /// Error in solver configuration, such as an unknown joint constraint type
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed input to a solver operation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Problem definition rejected by validation
    #[error("Invalid problem: {0}")]
    InvalidProblem(String),

    /// An appropriateness query would enumerate more candidates than allowed
    #[error("Enumeration limit exceeded: {candidates} candidate instantiations, limit is {limit}")]
    EnumerationLimit {
        /// Number of candidates the query would enumerate.
        candidates: u128,
        /// Configured upper bound.
        limit: u64,
    },

    /// No value can be assigned to a variable
    #[error("No viable value: {0}")]
    NoViableValue(String),

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for FuzzyForge operations
pub type Result<T> = std::result::Result<T, FuzzyForgeError>;
