//! Configuration schema definitions.
//!
//! This module defines the loader options as they appear in a config file.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Route module file name pattern used when none is configured.
pub const DEFAULT_ROUTES_FILE_NAME_PATTERN: &str = r"routes\.rs";

/// Root configuration for the route tree loader.
///
/// `O` is the opaque route options payload handed verbatim to every route
/// module. It defaults to a TOML table so a `[route_options]` section can be
/// read without declaring a type for it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, bound(deserialize = "O: Deserialize<'de> + Default"))]
pub struct LoaderConfig<O = toml::Table> {
    /// Directory names eligible for descent. Empty means no directory is entered.
    pub directory_white_list: Vec<String>,

    /// Directory names excluded even when whitelisted.
    pub directory_black_list: Vec<String>,

    /// Regular expression searched for in each file name.
    pub routes_file_name_pattern: String,

    /// Options passed to every route module.
    pub route_options: O,
}

impl<O: Default> Default for LoaderConfig<O> {
    fn default() -> Self {
        Self {
            directory_white_list: Vec::new(),
            directory_black_list: Vec::new(),
            routes_file_name_pattern: DEFAULT_ROUTES_FILE_NAME_PATTERN.to_string(),
            route_options: O::default(),
        }
    }
}
