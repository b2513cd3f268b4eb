//! Connection info fetched from a secret store
//!
//! The store is consulted once, at construction. Stores plug in through
//! [`SecretSource`]; [`MemorySecretSource`] covers tests and local wiring.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;
use tracing::{debug, error};

use crate::error::{ConnectionInfoError, Result};
use crate::provider::SqlConnectionInfo;
use crate::redact::redact;

/// Failure reported by a secret store
#[derive(Error, Debug)]
#[error("{message}")]
pub struct SecretSourceError {
    message: String,
}

impl SecretSourceError {
    /// Create an error with a human readable message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A store able to look up secrets by key
pub trait SecretSource {
    /// Fetch the secret stored under `key`, `Ok(None)` when it does not exist
    fn fetch_secret(&self, key: &str) -> std::result::Result<Option<String>, SecretSourceError>;
}

impl<T: SecretSource + ?Sized> SecretSource for &T {
    fn fetch_secret(&self, key: &str) -> std::result::Result<Option<String>, SecretSourceError> {
        (**self).fetch_secret(key)
    }
}

/// In-memory secret store
#[derive(Debug, Clone, Default)]
pub struct MemorySecretSource {
    secrets: HashMap<String, String>,
}

impl MemorySecretSource {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a secret, replacing any previous value for the key
    #[must_use]
    pub fn with_secret(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.secrets.insert(key.into(), value.into());
        self
    }
}

impl SecretSource for MemorySecretSource {
    fn fetch_secret(&self, key: &str) -> std::result::Result<Option<String>, SecretSourceError> {
        Ok(self.secrets.get(key).cloned())
    }
}

/// Connection info captured from a secret store
#[derive(Clone, PartialEq, Eq)]
pub struct SecretStoreConnectionInfo {
    key: String,
    url: String,
}

impl SecretStoreConnectionInfo {
    /// Fetch the connection string stored under `key`
    pub fn fetch<S>(source: &S, key: impl Into<String>) -> Result<Self>
    where
        S: SecretSource + ?Sized,
    {
        let key = key.into();
        debug!("Fetching connection string from secret store: {}", key);

        match source.fetch_secret(&key) {
            Ok(Some(url)) => {
                debug!(key = %key, url = %redact(&url), "Fetched connection string");
                Ok(Self { key, url })
            }
            Ok(None) => Err(ConnectionInfoError::SecretNotFound { key }),
            Err(err) => {
                error!("Secret store failed for {}: {}", key, err);
                Err(ConnectionInfoError::SecretStore { key, source: err })
            }
        }
    }

    /// Key the connection string was stored under
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl SqlConnectionInfo for SecretStoreConnectionInfo {
    fn connection_string(&self) -> &str {
        &self.url
    }
}

impl fmt::Debug for SecretStoreConnectionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretStoreConnectionInfo")
            .field("key", &self.key)
            .field("url", &redact(&self.url))
            .finish()
    }
}
