//! Logging setup for the simulator binary.
//!
//! `RUST_LOG` takes precedence; otherwise the crate logs at the given level.
//! Drop decisions are logged at TRACE, per-phase totals at DEBUG and run
//! start/finish at INFO.

use tracing_subscriber::{fmt, filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_logging () {
    init_logging_with_level("info")
}

pub fn init_logging_with_level (level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("{}={}", env!("CARGO_PKG_NAME"), level).into());

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_logging();
        init_logging_with_level("debug");
        tracing::info!("logging initialized twice");
    }
}
