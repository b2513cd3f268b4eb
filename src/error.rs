use thiserror::Error;

use crate::secret::SecretSourceError;

/// Errors raised while constructing a connection info provider
///
/// Reading a descriptor from a constructed provider never fails; every
/// failure surfaces here, before a value exists.
#[derive(Error, Debug)]
pub enum ConnectionInfoError {
    /// Environment variable is not set
    #[error("Environment variable {name} is not set")]
    MissingVariable {
        /// Name of the variable
        name: String,
    },

    /// Environment variable holds non UTF-8 data
    #[error("Environment variable {name} is not valid unicode")]
    NotUnicode {
        /// Name of the variable
        name: String,
    },

    /// Driver name is not one of the supported SQL drivers
    #[error("Unsupported database type: {name}")]
    UnsupportedDriver {
        /// The name that was given
        name: String,
    },

    /// Secret store has no entry for the key
    #[error("Secret {key} not found in secret store")]
    SecretNotFound {
        /// Key that was looked up
        key: String,
    },

    /// Secret store failed while fetching the key
    #[error("Failed to fetch secret {key}: {source}")]
    SecretStore {
        /// Key that was looked up
        key: String,
        /// Error reported by the store
        source: SecretSourceError,
    },
}

/// Result type alias for connection info construction
pub type Result<T> = std::result::Result<T, ConnectionInfoError>;
