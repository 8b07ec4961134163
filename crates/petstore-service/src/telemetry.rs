//! # Logging Bootstrap
//!
//! Installs the global `tracing` subscriber.
//!
//! ## Filter Resolution
//! - `RUST_LOG` when set, e.g. `RUST_LOG=petstore_db=debug,sqlx=warn`
//! - otherwise the configured level for the pet store crates, `warn` for sqlx

use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber filtered by `RUST_LOG` or `level`.
///
/// Returns `false` when a global subscriber was already installed, in which
/// case nothing changes.
pub fn init_tracing(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(level)))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

fn default_directives(level: &str) -> String {
    format!(
        "info,petstore_core={level},petstore_db={level},petstore_service={level},seed={level},sqlx=warn"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            assert!(EnvFilter::try_new(default_directives(level)).is_ok());
        }
    }

    #[test]
    fn test_second_init_is_noop() {
        init_tracing("debug");
        assert!(!init_tracing("debug"));
    }
}
