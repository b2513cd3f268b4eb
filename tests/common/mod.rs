/// Shared test utilities for dbapi integration tests
use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a test subscriber so construction events show up with `RUST_LOG`
pub fn init_tracing() {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dbapi=debug,warn"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .try_init();
    });
}

/// Build a unique environment variable name for a test
#[allow(dead_code)]
pub fn unique_var(test_name: &str) -> String {
    format!(
        "DBAPI_TEST_{}_{}",
        test_name.to_ascii_uppercase(),
        std::process::id()
    )
}
