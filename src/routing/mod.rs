//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Directory entry (name, file or directory)
//!     → matcher.rs (is it a route file? may we descend?)
//!     → registry.rs (relative path → route module)
//!     → router.rs (mount sub-routers, hand routers to modules)
//!
//! Router implementations:
//!     → axum_router.rs (axum::Router, nest at /{segment})
//!     → tree.rs (in-memory RouteTree for inspection)
//! ```
//!
//! # Design Decisions
//! - The loader depends on the `Router` trait only
//! - Route modules are looked up, never loaded from disk
//! - Directory names match exactly; file names match a regex or predicate

pub mod axum_router;
pub mod matcher;
pub mod registry;
pub mod router;
pub mod tree;

pub use axum_router::with_routes;
pub use matcher::{DirectoryFilter, FnMatcher, Matcher, PatternMatcher};
pub use registry::{BoxError, RouteModule, RouteRegistry};
pub use router::{Router, RouterFactory};
pub use tree::{Endpoint, Mount, RouteTree};
