/// Public library interface for the CyclePray MCP server
///
/// This module exports the server implementation along with the cycle,
/// favorites and notebook logic it is built on, so other applications and
/// tests can use them directly.

use std::path::PathBuf;
use thiserror::Error;

// Internal modules
pub mod analytics;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod mcp;
pub mod storage;
pub mod tools;

// Re-export public modules and types
pub use analytics::{AnalyticsEngine, HomeDashboard, MonthlyReport, RingGauge};
pub use catalog::ContentKind;
pub use config::Config;
pub use domain::*;
pub use storage::{KeyValueStore, KeyValueStoreExt, MemoryStorage, SqliteStorage, StorageError};
pub use tools::{ToolError, Workspace};

/// Errors that can occur during server operation
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(#[from] storage::StorageError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main server: the SQLite store plus the screens' working copies
///
/// One server serves one user on one device, so the working copies live
/// here for the whole session.
pub struct CyclePrayServer {
    storage: SqliteStorage,
    analytics: AnalyticsEngine,
    workspace: Workspace,
}

impl CyclePrayServer {
    /// Create a server with the database at `db_path`
    ///
    /// This will initialize the SQLite database with the required schema
    /// if it doesn't already exist.
    pub async fn new(db_path: PathBuf) -> Result<Self, ServerError> {
        tracing::info!("Initializing CyclePray server with database: {:?}", db_path);

        let storage = SqliteStorage::new(db_path)?;
        Ok(Self::with_storage(storage))
    }

    /// Create a server over an already opened store
    pub fn with_storage(storage: SqliteStorage) -> Self {
        Self {
            storage,
            analytics: AnalyticsEngine::new(),
            workspace: Workspace::new(),
        }
    }

    /// Run the MCP server, handling JSON-RPC requests over stdin/stdout
    ///
    /// This method will block until stdin closes or an error occurs.
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!("Starting MCP server...");

        // Test database connectivity
        let keys = self.storage.keys()?;
        tracing::info!("Server started successfully, found {} stored key(s)", keys.len());

        let mut mcp_server = mcp::McpServer::new(self);
        mcp_server.run().await?;

        Ok(())
    }

    /// Get a reference to the storage layer (useful for testing)
    pub fn storage(&self) -> &SqliteStorage {
        &self.storage
    }

    /// Get a reference to the analytics engine (useful for testing)
    pub fn analytics(&self) -> &AnalyticsEngine {
        &self.analytics
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Split borrow for tool calls that need the store and a working copy at once
    pub fn parts(&mut self) -> (&SqliteStorage, &AnalyticsEngine, &mut Workspace) {
        (&self.storage, &self.analytics, &mut self.workspace)
    }
}
