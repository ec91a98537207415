//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! loader produces:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms via the metrics facade)
//!
//! Consumers:
//!     → whatever subscriber / recorder the application installs
//! ```
//!
//! # Design Decisions
//! - The library never installs a recorder on its own
//! - Metrics are cheap (atomic increments, no-ops without a recorder)

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
