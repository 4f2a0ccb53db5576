/// Runtime configuration: where the database lives and how loud the logs are
///
/// Database path priority: `--database` flag > `CYCLE_PRAY_DATABASE` env var
/// > first writable default directory > temp dir.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the database location
pub const DATABASE_ENV: &str = "CYCLE_PRAY_DATABASE";

const DB_FILE_NAME: &str = "cycle_pray.db";

/// Errors while resolving configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to create database directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Log verbosity selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    /// `--verbose` wins over `--debug`
    pub fn from_flags(debug: bool, verbose: bool) -> Self {
        if verbose {
            LogLevel::Debug
        } else if debug {
            LogLevel::Info
        } else {
            LogLevel::Warn
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }

    /// Filter directive scoped to this crate
    pub fn directive(&self) -> String {
        format!("cycle_pray_mcp={}", self.as_str())
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database
    pub database_path: PathBuf,
    pub log_level: LogLevel,
}

impl Config {
    /// Resolve configuration from flags and the environment
    pub fn resolve(database: Option<PathBuf>, log_level: LogLevel) -> Result<Self, ConfigError> {
        let from_env = std::env::var(DATABASE_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        Self::resolve_with(database, from_env, log_level)
    }

    /// Same as `resolve` but with the environment value passed in
    pub fn resolve_with(
        database: Option<PathBuf>,
        from_env: Option<PathBuf>,
        log_level: LogLevel,
    ) -> Result<Self, ConfigError> {
        let database_path = match database.or(from_env) {
            Some(path) => {
                ensure_parent(&path)?;
                path
            }
            None => default_database_path()?,
        };

        Ok(Self {
            database_path,
            log_level,
        })
    }
}

fn ensure_parent(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}

/// Whether files can be created in `dir`, creating it if needed
fn is_writable_dir(dir: &Path) -> bool {
    if std::fs::create_dir_all(dir).is_err() {
        return false;
    }
    let probe = dir.join(".write_test");
    if std::fs::write(&probe, "test").is_ok() {
        let _ = std::fs::remove_file(&probe);
        true
    } else {
        false
    }
}

/// First candidate directory that can be written to
fn first_writable_dir<I: IntoIterator<Item = PathBuf>>(candidates: I) -> Option<PathBuf> {
    candidates.into_iter().find(|dir| is_writable_dir(dir))
}

/// Get the default database path with robust fallback strategy
pub fn default_database_path() -> Result<PathBuf, ConfigError> {
    let candidates = [
        // 1. User's home directory (preferred)
        dirs::home_dir().map(|p| p.join(".cycle_pray")),
        // 2. User's data directory (platform-specific)
        dirs::data_dir().map(|p| p.join("cycle_pray")),
        // 3. User's config directory
        dirs::config_dir().map(|p| p.join("cycle_pray")),
        // 4. Current working directory (last resort)
        std::env::current_dir().ok().map(|p| p.join(".cycle_pray")),
    ];

    if let Some(dir) = first_writable_dir(candidates.into_iter().flatten()) {
        return Ok(dir.join(DB_FILE_NAME));
    }

    // Ultimate fallback: use a temporary directory
    let temp_dir = std::env::temp_dir().join("cycle_pray");
    std::fs::create_dir_all(&temp_dir).map_err(|source| ConfigError::CreateDir {
        path: temp_dir.clone(),
        source,
    })?;

    tracing::warn!("Using temporary directory for database: {}", temp_dir.display());
    Ok(temp_dir.join(DB_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_log_level_from_flags() {
        assert_eq!(LogLevel::from_flags(false, false), LogLevel::Warn);
        assert_eq!(LogLevel::from_flags(true, false), LogLevel::Info);
        assert_eq!(LogLevel::from_flags(true, true), LogLevel::Debug);
        assert_eq!(LogLevel::Debug.directive(), "cycle_pray_mcp=debug");
    }

    #[test]
    fn test_flag_wins_over_env() {
        let temp_dir = tempdir().unwrap();
        let flag = temp_dir.path().join("flag").join("app.db");
        let env = temp_dir.path().join("env").join("app.db");

        let config = Config::resolve_with(Some(flag.clone()), Some(env), LogLevel::Warn).unwrap();
        assert_eq!(config.database_path, flag);
        assert!(flag.parent().unwrap().exists());
    }

    #[test]
    fn test_env_used_without_flag() {
        let temp_dir = tempdir().unwrap();
        let env = temp_dir.path().join("nested").join("dir").join("app.db");

        let config = Config::resolve_with(None, Some(env.clone()), LogLevel::Info).unwrap();
        assert_eq!(config.database_path, env);
        assert!(env.parent().unwrap().exists());
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_first_writable_dir_skips_unusable_candidates() {
        let temp_dir = tempdir().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let usable = temp_dir.path().join("data").join("cycle_pray");

        let found = first_writable_dir(vec![blocker.join("cycle_pray"), usable.clone()]).unwrap();
        assert_eq!(found, usable);
        assert!(usable.is_dir());
        assert!(!usable.join(".write_test").exists());
    }
}
