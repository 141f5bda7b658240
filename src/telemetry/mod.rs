//! Tracing initialization for host applications.

use tracing_subscriber::{fmt, EnvFilter, prelude::*};

const DEFAULT_FILTER: &str = "info";

/// Install the global tracing subscriber with an env filter.
///
/// Use RUST_LOG to configure, e.g.:
/// RUST_LOG=roomgeo=debug
///
/// Leaves an already installed subscriber in place; see [`try_init`].
pub fn init() {
    if let Err(err) = try_init() {
        tracing::debug!(%err, "tracing subscriber already installed");
    }
}

/// Like [`init`], but returns an error when a subscriber is already installed.
pub fn try_init() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(filter())
        .with(fmt::layer().with_target(true))
        .try_init()?;
    Ok(())
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_install_fails() {
        // another test may have installed one already; either way the second call must fail
        let _ = try_init();
        assert!(try_init().is_err());
        tracing::info!("telemetry installed");
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
