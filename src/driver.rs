//! Supported SQL drivers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConnectionInfoError;

/// SQL database families a host-based connection string can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDriver {
    /// `MariaDB` through the `MariaDB` JDBC driver
    #[default]
    MariaDb,
    /// `MySQL` through the `MySQL` Connector/J driver
    MySql,
}

impl SqlDriver {
    /// Scheme prefix used when rendering a connection string
    #[must_use]
    pub const fn scheme(self) -> &'static str {
        match self {
            Self::MariaDb => "jdbc:mariadb",
            Self::MySql => "jdbc:mysql",
        }
    }

    /// Port used when none is configured
    #[must_use]
    pub const fn default_port(self) -> u16 {
        3306
    }

    /// Lowercase name of the driver
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MariaDb => "mariadb",
            Self::MySql => "mysql",
        }
    }
}

impl fmt::Display for SqlDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SqlDriver {
    type Err = ConnectionInfoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mariadb" => Ok(Self::MariaDb),
            "mysql" => Ok(Self::MySql),
            _ => Err(ConnectionInfoError::UnsupportedDriver {
                name: s.to_string(),
            }),
        }
    }
}
