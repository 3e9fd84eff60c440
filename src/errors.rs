//! # Error Types Module
//!
//! This module defines the error type shared by the grocery-list store and its
//! collaborators. Quantity parsing never fails, so every variant here comes from
//! the I/O boundary: persistence and recipe lookup.

/// Errors surfaced by grocery-list operations
#[derive(Debug, Clone, PartialEq)]
pub enum GroceryError {
    /// Reading or writing the persisted list failed
    Storage(String),
    /// The list could not be encoded or a recipe file could not be decoded
    Serialization(String),
    /// The recipe collaborator failed to answer
    RecipeLookup(String),
}

impl std::fmt::Display for GroceryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroceryError::Storage(msg) => write!(f, "Storage error: {msg}"),
            GroceryError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            GroceryError::RecipeLookup(msg) => write!(f, "Recipe lookup error: {msg}"),
        }
    }
}

impl std::error::Error for GroceryError {}

impl From<std::io::Error> for GroceryError {
    fn from(err: std::io::Error) -> Self {
        GroceryError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for GroceryError {
    fn from(err: serde_json::Error) -> Self {
        GroceryError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for GroceryError {
    fn from(err: anyhow::Error) -> Self {
        GroceryError::Storage(format!("{err:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            GroceryError::Storage("disk full".to_string()).to_string(),
            "Storage error: disk full"
        );
        assert_eq!(
            GroceryError::RecipeLookup("timeout".to_string()).to_string(),
            "Recipe lookup error: timeout"
        );
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: GroceryError = io.into();
        assert!(matches!(err, GroceryError::Storage(msg) if msg.contains("denied")));
    }

    #[test]
    fn test_json_error_maps_to_serialization() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: GroceryError = json_err.into();
        assert!(matches!(err, GroceryError::Serialization(_)));
    }
}
