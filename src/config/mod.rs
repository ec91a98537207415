//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → LoaderConfig (validated, immutable)
//!     → LoaderBuilder::options(..)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once the loader is built
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{LoaderConfig, DEFAULT_ROUTES_FILE_NAME_PATTERN};
pub use validation::{validate_config, ValidationError};
