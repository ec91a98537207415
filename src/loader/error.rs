//! Loader error definitions.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::validation::ValidationError;
use crate::routing::registry::BoxError;

/// Errors raised by invalid loader construction or calls.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// No router factory was supplied.
    #[error("missing router factory")]
    MissingRouterFactory,

    /// `load_routes` was called without a router.
    #[error("missing router")]
    MissingRouter,

    /// Options failed semantic validation.
    #[error("invalid loader options: {}", join(.0))]
    Invalid(Vec<ValidationError>),
}

/// Errors that abort a `load_routes` call.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Listing a directory or reading an entry's metadata failed.
    #[error("failed to read {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file matched the route pattern but no module is registered for it.
    #[error("no route module registered for {}", .path.display())]
    ModuleNotRegistered { path: PathBuf },

    /// A route module returned an error.
    #[error("route module {} failed: {source}", .path.display())]
    RouteModule {
        path: PathBuf,
        #[source]
        source: BoxError,
    },
}

/// Result type for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
