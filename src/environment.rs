//! Connection info sourced from the process environment
//!
//! The variable is read exactly once, when the value is constructed. A missing
//! variable is a construction error, so a constructed [`EnvConnectionInfo`]
//! always has a connection string to hand out.

use std::env::{self, VarError};
use std::fmt;

use tracing::{debug, warn};

use crate::error::{ConnectionInfoError, Result};
use crate::provider::SqlConnectionInfo;
use crate::redact::redact;

/// Connection info captured from an environment variable
#[derive(Clone, PartialEq, Eq)]
pub struct EnvConnectionInfo {
    variable: String,
    url: String,
}

impl EnvConnectionInfo {
    /// Read the connection string from the named environment variable
    pub fn from_env(variable: impl Into<String>) -> Result<Self> {
        let variable = variable.into();
        let url = read_var(&variable)?;
        Ok(Self::captured(variable, url))
    }

    /// Read the connection string through an explicit lookup function
    ///
    /// `lookup` stands in for the environment, which keeps callers and tests
    /// independent of process-global state.
    pub fn from_lookup<F>(variable: impl Into<String>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let variable = variable.into();
        let url = lookup(&variable).ok_or_else(|| ConnectionInfoError::MissingVariable {
            name: variable.clone(),
        })?;
        Ok(Self::captured(variable, url))
    }

    /// Name of the variable the connection string was read from
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    fn captured(variable: String, url: String) -> Self {
        if url.is_empty() {
            warn!(variable = %variable, "Environment variable holds an empty connection string");
        }
        debug!(variable = %variable, url = %redact(&url), "Captured connection string");
        Self { variable, url }
    }
}

impl SqlConnectionInfo for EnvConnectionInfo {
    fn connection_string(&self) -> &str {
        &self.url
    }
}

impl fmt::Debug for EnvConnectionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvConnectionInfo")
            .field("variable", &self.variable)
            .field("url", &redact(&self.url))
            .finish()
    }
}

/// Read an environment variable, mapping failures to construction errors
pub(crate) fn read_var(name: &str) -> Result<String> {
    debug!("Reading environment variable: {}", name);
    env::var(name).map_err(|e| match e {
        VarError::NotPresent => ConnectionInfoError::MissingVariable {
            name: name.to_string(),
        },
        VarError::NotUnicode(_) => ConnectionInfoError::NotUnicode {
            name: name.to_string(),
        },
    })
}
