//! The connection info capability
//!
//! A [`SqlConnectionInfo`] hands out a connection string and nothing else. How
//! the string was produced (a literal, an environment variable, a secret
//! store, a set of host credentials) is left to the implementing type.
//!
//! ```
//! use dbapi::{SqlConnectionInfo, StaticConnectionInfo};
//!
//! fn describe(info: &impl SqlConnectionInfo) -> usize {
//!     info.connection_string().len()
//! }
//!
//! let info = StaticConnectionInfo::new("jdbc:mysql://db.example.com:3306/app");
//! assert_eq!(describe(&info), 36);
//! ```

use std::rc::Rc;
use std::sync::Arc;

/// Anything able to produce a database connection string
///
/// The returned descriptor is opaque: no format is imposed, and empty strings
/// are allowed. Implementations must answer from state captured at
/// construction, so repeated calls return the same value and perform no I/O.
pub trait SqlConnectionInfo {
    /// Returns the connection string for the database
    fn connection_string(&self) -> &str;
}

/// A connection info provider that can be shared across threads
pub type SharedConnectionInfo = Arc<dyn SqlConnectionInfo + Send + Sync>;

impl<T: SqlConnectionInfo + ?Sized> SqlConnectionInfo for &T {
    fn connection_string(&self) -> &str {
        (**self).connection_string()
    }
}

impl<T: SqlConnectionInfo + ?Sized> SqlConnectionInfo for Box<T> {
    fn connection_string(&self) -> &str {
        (**self).connection_string()
    }
}

impl<T: SqlConnectionInfo + ?Sized> SqlConnectionInfo for Rc<T> {
    fn connection_string(&self) -> &str {
        (**self).connection_string()
    }
}

impl<T: SqlConnectionInfo + ?Sized> SqlConnectionInfo for Arc<T> {
    fn connection_string(&self) -> &str {
        (**self).connection_string()
    }
}
