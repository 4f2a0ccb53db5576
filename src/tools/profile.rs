/// Tools for the user's display name
///
/// This module implements the profile_set_name MCP tool and the name
/// lookups other screens greet with.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::storage::{keys, KeyValueStore, StorageError};
use crate::tools::ToolError;

/// Parameters for setting the display name
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SetNameParams {
    /// Name to greet the user with
    pub name: String,
}

/// Response from setting the display name
#[derive(Debug, Serialize)]
pub struct SetNameResponse {
    pub success: bool,
    pub name: String,
    /// Whether this was the first name stored on this device
    pub first_visit: bool,
    pub message: String,
}

/// Store the display name. Blank names are rejected; anything else is
/// stored exactly as given.
pub fn set_user_name<S: KeyValueStore + ?Sized>(
    storage: &S,
    params: SetNameParams,
) -> Result<SetNameResponse, ToolError> {
    let trimmed = params.name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidName("Please enter your name to continue.".to_string()).into());
    }

    let first_visit = !has_visited(storage).map_err(|e| ToolError::not_persisted("your name", e))?;
    storage
        .set(keys::USER_NAME, &params.name)
        .map_err(|e| ToolError::not_persisted("your name", e))?;

    tracing::info!("Stored display name (first visit: {})", first_visit);

    let message = if first_visit {
        format!("Welcome, {}! 🌸", trimmed)
    } else {
        format!("Name updated. Welcome back, {}! 🌸", trimmed)
    };

    Ok(SetNameResponse {
        success: true,
        first_visit,
        message,
        name: params.name,
    })
}

/// The stored display name, if any non-blank one exists
pub fn user_name<S: KeyValueStore + ?Sized>(storage: &S) -> Result<Option<String>, StorageError> {
    Ok(storage
        .get(keys::USER_NAME)?
        .filter(|name| !name.trim().is_empty()))
}

/// Whether the user has been through the landing screen
pub fn has_visited<S: KeyValueStore + ?Sized>(storage: &S) -> Result<bool, StorageError> {
    Ok(user_name(storage)?.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_set_user_name() {
        let storage = MemoryStorage::new();
        assert!(!has_visited(&storage).unwrap());

        let response = set_user_name(&storage, SetNameParams { name: " Maryam ".to_string() }).unwrap();
        assert!(response.success);
        assert_eq!(response.message, "Welcome, Maryam! 🌸");
        assert_eq!(user_name(&storage).unwrap().as_deref(), Some(" Maryam "));
        assert!(has_visited(&storage).unwrap());
        assert!(response.first_visit);

        let renamed = set_user_name(&storage, SetNameParams { name: "Aisha".to_string() }).unwrap();
        assert!(!renamed.first_visit);
        assert_eq!(renamed.message, "Name updated. Welcome back, Aisha! 🌸");
        assert_eq!(user_name(&storage).unwrap().as_deref(), Some("Aisha"));
    }

    #[test]
    fn test_blank_name_rejected() {
        let storage = MemoryStorage::new();
        let err = set_user_name(&storage, SetNameParams { name: "   ".to_string() }).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(storage.get(keys::USER_NAME).unwrap(), None);
    }

    #[test]
    fn test_set_name_while_offline() {
        let storage = MemoryStorage::new();
        storage.set_offline(true);
        let err = set_user_name(&storage, SetNameParams { name: "Aisha".to_string() }).unwrap_err();
        assert!(matches!(err, ToolError::NotPersisted { .. }));
    }
}
