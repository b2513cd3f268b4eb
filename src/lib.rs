//! `dbapi` - Connection descriptors for SQL databases
//!
//! The crate revolves around one capability, [`SqlConnectionInfo`]: anything
//! implementing it can hand out a connection string. Several providers are
//! included, each capturing its string at construction time.

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    missing_docs,
    rust_2018_idioms
)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

/// Settings for host-based connections
pub mod config;
pub mod connection;
pub mod driver;
pub mod environment;
/// Error types for connection info construction
pub mod error;
pub mod fixed;
pub mod provider;
pub mod redact;
pub mod secret;

pub use config::ConnectionSettings;
pub use connection::ConnectionInfo;
pub use driver::SqlDriver;
pub use environment::EnvConnectionInfo;
pub use error::{ConnectionInfoError, Result};
pub use fixed::StaticConnectionInfo;
pub use provider::{SharedConnectionInfo, SqlConnectionInfo};
pub use redact::redact;
pub use secret::{MemorySecretSource, SecretSource, SecretSourceError, SecretStoreConnectionInfo};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
