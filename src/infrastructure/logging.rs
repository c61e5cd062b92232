//! Logging configuration
//!
//! Initializes tracing for a validation host.

/// Initializes logging with the specified level.
///
/// `RUST_LOG` wins over `level` when set. An already installed global
/// subscriber is kept; the failed install is logged at debug level.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let installed = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_line_number(true)
        .try_init();

    if let Err(err) = installed {
        tracing::debug!(%err, "subscriber already installed, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        init_logging("debug");
        init_logging("trace");
    }
}
