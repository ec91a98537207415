//! Route Tree Loader Library
//!
//! Mounts route modules found in a directory tree onto a router tree that
//! mirrors the directory layout.

pub mod config;
pub mod loader;
pub mod observability;
pub mod routing;

pub use config::schema::LoaderConfig;
pub use loader::{ConfigurationError, LoadError, Loader, LoaderBuilder, RouteTreeWatcher};
pub use routing::{BoxError, RouteModule, RouteRegistry, RouteTree, Router, RouterFactory};
