use std::fmt;

use serde::{Deserialize, Serialize};

use crate::driver::SqlDriver;

/// Settings describing a host-based database connection
///
/// The struct only derives serde traits; callers decide where the settings
/// come from (a TOML section, JSON, a hand-built value).
#[derive(Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    /// Database driver
    #[serde(default)]
    pub driver: SqlDriver,
    /// Database host
    pub host: String,
    /// Database port, the driver default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Database user
    pub user: String,
    /// Inline password, takes precedence over `password_env`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Environment variable containing the password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_env: Option<String>,
    /// Database name
    pub database: String,
}

impl ConnectionSettings {
    /// Create settings for the given driver with no password and default port
    #[must_use]
    pub fn new(
        driver: SqlDriver,
        host: impl Into<String>,
        user: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            driver,
            host: host.into(),
            port: None,
            user: user.into(),
            password: None,
            password_env: None,
            database: database.into(),
        }
    }

    /// Port to connect to after applying the driver default
    #[must_use]
    pub fn effective_port(&self) -> u16 {
        self.port.unwrap_or_else(|| self.driver.default_port())
    }
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("driver", &self.driver)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("password_env", &self.password_env)
            .field("database", &self.database)
            .finish()
    }
}
