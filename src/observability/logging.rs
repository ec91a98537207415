//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Configure log level from `RUST_LOG`, with a caller default
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `try_init` so a second call reports an error instead of panicking

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError};

/// Install a global fmt subscriber.
///
/// `default_filter` is used when `RUST_LOG` is unset or invalid, e.g.
/// `"route_tree_loader=debug"`.
pub fn init_logging(default_filter: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        let _ = init_logging("route_tree_loader=debug");
        assert!(init_logging("route_tree_loader=debug").is_err());
    }
}
