//! Centralized error handling for Aether Deck
//!
//! This module provides a unified error handling approach using:
//! - `thiserror` for library-style errors with proper error types
//! - `anyhow` for application-level error handling with context

use thiserror::Error;

/// Core errors that can occur in the deck.
#[derive(Error, Debug)]
pub enum DeckError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(String),
}

/// Result type alias for deck operations.
pub type DeckResult<T> = anyhow::Result<T>;

/// Extension trait for adding deck-specific context to errors.
pub trait ResultExt<T> {
    /// Add configuration context to an error
    fn with_config_context(self, setting: &str) -> DeckResult<T>;

    /// Add file operation context to an error
    fn with_file_context(self, path: &str) -> DeckResult<T>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for Result<T, E> {
    fn with_config_context(self, setting: &str) -> DeckResult<T> {
        use anyhow::Context;
        self.map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("Configuration error for: {}", setting))
    }

    fn with_file_context(self, path: &str) -> DeckResult<T> {
        use anyhow::Context;
        self.map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("File operation failed: {}", path))
    }
}

/// Helper to create a configuration error.
pub fn config_error(message: impl Into<String>) -> DeckError {
    DeckError::Config(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_error_display() {
        let err = DeckError::Config("invalid value".to_string());
        assert!(err.to_string().contains("Configuration error"));

        let err = DeckError::Logger("already initialized".to_string());
        assert!(err.to_string().contains("Logger error"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DeckError = io_err.into();
        assert!(matches!(err, DeckError::Io(_)));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_result_ext_config_context() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));

        let with_context = result.with_config_context("particle_count");
        assert!(with_context.is_err());

        let err_string = format!("{:?}", with_context.unwrap_err());
        assert!(err_string.contains("particle_count"));
    }

    #[test]
    fn test_result_ext_file_context() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));

        let err_string = format!(
            "{:?}",
            result.with_file_context("/tmp/deck.json").unwrap_err()
        );
        assert!(err_string.contains("/tmp/deck.json"));
    }

    #[test]
    fn test_config_error_helper() {
        let err = config_error("seed out of range");
        assert!(matches!(err, DeckError::Config(_)));
        assert!(err.to_string().contains("seed out of range"));
    }
}
