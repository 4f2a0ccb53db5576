/// MCP tools for the cycle and worship companion
///
/// Each submodule covers one screen. Tools take the storage collaborator
/// plus whatever in-memory working copy the screen owns, and return a
/// response struct with a human-readable `message`.

pub mod calendar;
pub mod favorites;
pub mod home;
pub mod notebook;
pub mod profile;
pub mod summary;

// Re-export tool functions for easy access
pub use calendar::*;
pub use favorites::*;
pub use home::*;
pub use notebook::*;
pub use profile::*;
pub use summary::*;

use thiserror::Error;

use crate::domain::{DomainError, NotebookDraft};
use crate::storage::StorageError;

/// Errors returned by tool calls
#[derive(Error, Debug)]
pub enum ToolError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The change was applied in memory but the write failed
    #[error("Could not save {what}: {source}. Your changes are kept for this session.")]
    NotPersisted {
        what: &'static str,
        #[source]
        source: StorageError,
    },
}

impl ToolError {
    pub fn not_persisted(what: &'static str, source: StorageError) -> Self {
        ToolError::NotPersisted { what, source }
    }

    /// Caller supplied something unusable
    pub fn is_validation(&self) -> bool {
        match self {
            ToolError::Domain(e) => e.is_invalid_input() || matches!(e, DomainError::UnknownContent(_)),
            _ => false,
        }
    }
}

/// In-memory working copies held between tool calls
///
/// Each screen loads its state once and keeps it here until it flushes.
/// The notebook draft starts blank and is never loaded from storage.
#[derive(Debug, Default)]
pub struct Workspace {
    pub calendar: Option<CalendarSession>,
    pub notebook: NotebookDraft,
    pub favorites: FavoriteShelf,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        let err = ToolError::from(DomainError::InvalidInput {
            message: "bad date".to_string(),
        });
        assert!(err.is_validation());

        let err = ToolError::not_persisted(
            "period dates",
            StorageError::Unavailable("offline".to_string()),
        );
        assert!(!err.is_validation());
        assert!(err.to_string().contains("kept for this session"));
    }
}
