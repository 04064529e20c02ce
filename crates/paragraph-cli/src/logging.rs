//! Logging setup for `para-nav`.
//!
//! Logs go to stderr so stdout stays machine readable.
//!
//! ## Environment Variables
//!
//! 1. **`PARA_NAV_LOG`** (highest priority) - filter for this tool
//! 2. **`RUST_LOG`** - standard tracing filter
//! 3. **Default** - `warn`

use std::env;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. Safe to call when a subscriber is already set.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(create_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn create_filter() -> EnvFilter {
    if let Ok(filter) = env::var("PARA_NAV_LOG") {
        return expand_filter(&filter);
    }

    if let Ok(rust_log) = env::var("RUST_LOG") {
        return EnvFilter::new(rust_log);
    }

    EnvFilter::new("warn")
}

/// A bare level (`PARA_NAV_LOG=debug`) applies to the navigation crates only; anything with
/// module syntax is used as-is.
fn expand_filter(filter: &str) -> EnvFilter {
    if filter.contains(['=', ',', ':']) {
        return EnvFilter::new(filter);
    }
    EnvFilter::new(format!(
        "warn,paragraph_core={filter},paragraph_cli={filter}"
    ))
}
