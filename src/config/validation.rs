//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Directory list entries must be single path segments
//! - The route file pattern must compile
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoaderConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use regex::Regex;
use thiserror::Error;

use crate::config::schema::LoaderConfig;

/// A single semantic problem found in a loader configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A whitelist or blacklist entry is not one directory name.
    #[error("{list} entry {name:?} is not a single directory name")]
    InvalidDirectoryName { list: &'static str, name: String },

    /// The route file pattern does not compile.
    #[error("routes_file_name_pattern {pattern:?} is invalid: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// Validate a loader configuration.
pub fn validate_config<O>(config: &LoaderConfig<O>) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_directory_list("directory_white_list", &config.directory_white_list, &mut errors);
    check_directory_list("directory_black_list", &config.directory_black_list, &mut errors);

    if let Err(e) = Regex::new(&config.routes_file_name_pattern) {
        errors.push(ValidationError::InvalidPattern {
            pattern: config.routes_file_name_pattern.clone(),
            reason: e.to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_directory_list(list: &'static str, names: &[String], errors: &mut Vec<ValidationError>) {
    for name in names.iter().filter(|name| !is_directory_name(name)) {
        errors.push(ValidationError::InvalidDirectoryName {
            list,
            name: name.clone(),
        });
    }
}

/// A directory name becomes a mount segment, so it must be exactly one
/// path component and must not read as a path parameter or wildcard.
fn is_directory_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '{', '}'])
        && !name.starts_with([':', '*'])
}
