//! Error type definitions for pairing operations

use thiserror::Error as ThisError;

/// Primary error type for pairing and group operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A domain parameter or call argument was rejected
    #[error("{context}: {message}")]
    InvalidParameter {
        /// Operation that rejected the parameter
        context: &'static str,
        /// What was wrong with it
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        /// Operation that checked the length
        context: &'static str,
        /// Length the operation requires
        expected: usize,
        /// Length it received
        actual: usize,
    },

    /// Coordinates do not describe a point of the expected group
    #[error("Invalid point: {context}")]
    InvalidPoint {
        /// Constructor that rejected the coordinates
        context: &'static str,
    },

    /// An engine was used before `init` or after `cleanup`
    #[error("{context}: pairing parameters are not initialized")]
    UninitializedParameters {
        /// Operation that found no parameters
        context: &'static str,
    },

    /// An internal invariant was violated, such as inverting zero
    #[error("Arithmetic failure in {context}: {message}")]
    ArithmeticFailure {
        /// Operation that failed
        context: &'static str,
        /// Failure details
        message: String,
    },

    /// The batch thread pool could not be created
    #[error("Worker pool error: {message}")]
    WorkerPool {
        /// Message reported by the pool builder
        message: String,
    },
}

/// Result type for pairing operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidPoint { .. } => Self::InvalidPoint { context },
            Self::UninitializedParameters { .. } => Self::UninitializedParameters { context },
            Self::ArithmeticFailure { message, .. } => Self::ArithmeticFailure { context, message },
            Self::WorkerPool { message } => Self::WorkerPool { message },
        }
    }
}
