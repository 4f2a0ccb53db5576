/// Domain module containing the pure cycle, favorites and notebook logic
///
/// Nothing in here touches storage. Screens hand in the state they loaded,
/// call these functions, and persist whatever comes back.

pub mod cycle;
pub mod favorites;
pub mod notebook;
pub mod types;

// Re-export public types for easy access
pub use cycle::*;
pub use favorites::*;
pub use notebook::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Unknown content: {0}")]
    UnknownContent(String),
}

impl DomainError {
    /// Whether this error came from malformed caller input
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidInput { .. } | DomainError::InvalidDate(_) | DomainError::InvalidName(_)
        )
    }
}
