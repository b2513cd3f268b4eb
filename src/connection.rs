//! Host-based connection info
//!
//! Renders `host`, `port`, `user`, `password` and `database` into a JDBC style
//! connection string once, at construction:
//!
//! ```text
//! jdbc:mariadb://127.0.0.1:3306/app?user=root&password=secret
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use dbapi::{ConnectionInfo, SqlConnectionInfo, SqlDriver};
//!
//! let info = ConnectionInfo::new(SqlDriver::MySql, "db.internal", "app", "s3cret", "orders")
//!     .with_port(3307);
//!
//! assert_eq!(
//!     info.connection_string(),
//!     "jdbc:mysql://db.internal:3307/orders?user=app&password=s3cret"
//! );
//! ```

use std::borrow::Cow;
use std::fmt;

use tracing::debug;

use crate::config::ConnectionSettings;
use crate::driver::SqlDriver;
use crate::environment::read_var;
use crate::error::{ConnectionInfoError, Result};
use crate::provider::SqlConnectionInfo;
use crate::redact::redact;

/// Connection info built from host credentials
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionInfo {
    driver: SqlDriver,
    host: String,
    port: u16,
    user: String,
    password: String,
    database: String,
    url: String,
}

impl ConnectionInfo {
    /// Create connection info on the driver's default port
    #[must_use]
    pub fn new(
        driver: SqlDriver,
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self::assemble(
            driver,
            host.into(),
            driver.default_port(),
            user.into(),
            password.into(),
            database.into(),
        )
    }

    fn assemble(
        driver: SqlDriver,
        host: String,
        port: u16,
        user: String,
        password: String,
        database: String,
    ) -> Self {
        let mut info = Self {
            driver,
            host,
            port,
            user,
            password,
            database,
            url: String::new(),
        };
        info.url = info.render();

        debug!(
            "Created connection info: driver={}, host={}:{}, user={}, database={}",
            info.driver, info.host, info.port, info.user, info.database
        );
        info
    }

    /// Use a non-default port
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self.url = self.render();
        self
    }

    /// Build connection info from settings, reading `password_env` from the
    /// process environment
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionInfoError::MissingVariable`] or
    /// [`ConnectionInfoError::NotUnicode`] when the password variable cannot be read.
    pub fn from_settings(settings: &ConnectionSettings) -> Result<Self> {
        Self::build(settings, read_var)
    }

    /// Build connection info from settings, reading `password_env` through `lookup`
    pub fn from_settings_with<F>(settings: &ConnectionSettings, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::build(settings, |name| {
            lookup(name).ok_or_else(|| ConnectionInfoError::MissingVariable {
                name: name.to_string(),
            })
        })
    }

    fn build<F>(settings: &ConnectionSettings, read: F) -> Result<Self>
    where
        F: FnOnce(&str) -> Result<String>,
    {
        let password = match (&settings.password, &settings.password_env) {
            (Some(password), _) => password.clone(),
            (None, Some(password_env)) => {
                debug!("Reading password from environment variable: {}", password_env);
                read(password_env)?
            }
            (None, None) => String::new(),
        };

        Ok(Self::assemble(
            settings.driver,
            settings.host.clone(),
            settings.effective_port(),
            settings.user.clone(),
            password,
            settings.database.clone(),
        ))
    }

    fn render(&self) -> String {
        format!(
            "{}://{}:{}/{}?user={}&password={}",
            self.driver.scheme(),
            self.host,
            self.port,
            self.database,
            escape_query_value(&self.user),
            escape_query_value(&self.password)
        )
    }

    /// Database driver
    #[must_use]
    pub const fn driver(&self) -> SqlDriver {
        self.driver
    }

    /// Database host
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Database port
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Database user
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Database name
    #[must_use]
    pub fn database(&self) -> &str {
        &self.database
    }
}

/// Percent-encode the characters that would end a query value early
///
/// Everything else is written verbatim, matching what JDBC drivers expect.
fn escape_query_value(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '#']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 4);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("%26"),
            '#' => escaped.push_str("%23"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

impl SqlConnectionInfo for ConnectionInfo {
    fn connection_string(&self) -> &str {
        &self.url
    }
}

impl fmt::Debug for ConnectionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionInfo")
            .field("driver", &self.driver)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("database", &self.database)
            .field("url", &redact(&self.url))
            .finish_non_exhaustive()
    }
}
