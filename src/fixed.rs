//! Connection info holding a literal connection string

use std::fmt;

use tracing::debug;

use crate::provider::SqlConnectionInfo;
use crate::redact::redact;

/// Connection info wrapping a fixed connection string
///
/// The string is returned exactly as given: no trimming, escaping or
/// validation is applied, and the empty string is accepted.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StaticConnectionInfo {
    url: String,
}

impl StaticConnectionInfo {
    /// Create connection info from a literal connection string
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        debug!(url = %redact(&url), "Created static connection info");
        Self { url }
    }

    /// Consume the connection info and return the owned string
    #[must_use]
    pub fn into_inner(self) -> String {
        self.url
    }
}

impl SqlConnectionInfo for StaticConnectionInfo {
    fn connection_string(&self) -> &str {
        &self.url
    }
}

impl From<String> for StaticConnectionInfo {
    fn from(url: String) -> Self {
        Self::new(url)
    }
}

impl From<&str> for StaticConnectionInfo {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl fmt::Debug for StaticConnectionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticConnectionInfo")
            .field("url", &redact(&self.url))
            .finish()
    }
}
