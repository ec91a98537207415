//! Route tree loading subsystem.
//!
//! # Data Flow
//! ```text
//! LoaderConfig + router factory + RouteRegistry
//!     → builder.rs (validate, compile matcher)
//!     → Loader (immutable)
//!
//! load_routes(root, router):
//!     → tree_loader.rs (list, classify, recurse)
//!     → mount non-empty sub-routers, invoke route modules
//!     → Ok(has_routes) or first error
//!
//! On directory change:
//!     watcher.rs detects change
//!     → fresh router from factory
//!     → load_routes
//!     → new router sent to the application (only on success)
//! ```
//!
//! # Design Decisions
//! - Construction never touches the filesystem
//! - A sub-router is mounted only if its subtree registered a route
//! - Errors propagate unchanged in kind; there is no rollback of mounts

pub mod builder;
pub mod error;
pub mod tree_loader;
pub mod watcher;

pub use builder::LoaderBuilder;
pub use error::{ConfigurationError, LoadError, LoadResult};
pub use tree_loader::Loader;
pub use watcher::RouteTreeWatcher;
