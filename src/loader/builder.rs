//! Loader construction.

use std::sync::Arc;

use crate::config::schema::LoaderConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::loader::error::ConfigurationError;
use crate::loader::tree_loader::Loader;
use crate::routing::matcher::{DirectoryFilter, FnMatcher, Matcher, PatternMatcher};
use crate::routing::registry::{BoxError, RouteRegistry};
use crate::routing::router::RouterFactory;

/// Builder for [`Loader`].
///
/// Only the router factory is required. Everything else falls back to
/// [`LoaderConfig::default`] and an empty registry.
pub struct LoaderBuilder<R, O = toml::Table> {
    router_factory: Option<Arc<dyn RouterFactory<R>>>,
    config: LoaderConfig<O>,
    route_file_matcher: Option<Arc<dyn Matcher>>,
    registry: RouteRegistry<R, O>,
}

impl<R, O: Default> LoaderBuilder<R, O> {
    pub fn new() -> Self {
        Self {
            router_factory: None,
            config: LoaderConfig::default(),
            route_file_matcher: None,
            registry: RouteRegistry::new(),
        }
    }
}

impl<R, O: Default> Default for LoaderBuilder<R, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, O> LoaderBuilder<R, O> {
    /// Set the factory used to create one router per descended directory.
    pub fn router_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
    {
        self.router_factory = Some(Arc::new(factory));
        self
    }

    /// Replace all options with `config`.
    pub fn options(mut self, config: LoaderConfig<O>) -> Self {
        self.config = config;
        self
    }

    pub fn directory_white_list<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.config.directory_white_list = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn directory_black_list<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.config.directory_black_list = names.into_iter().map(Into::into).collect();
        self
    }

    /// Regex searched for in file names.
    ///
    /// Validated even when a custom matcher replaces it.
    pub fn routes_file_name_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.routes_file_name_pattern = pattern.into();
        self
    }

    /// Use a predicate instead of the file name pattern.
    pub fn route_file_matcher<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.route_file_matcher = Some(Arc::new(FnMatcher::new(predicate)));
        self
    }

    pub fn route_options(mut self, options: O) -> Self {
        self.config.route_options = options;
        self
    }

    /// Replace the route registry.
    pub fn registry(mut self, registry: RouteRegistry<R, O>) -> Self {
        self.registry = registry;
        self
    }

    /// Register a single route module. See [`RouteRegistry::register`].
    pub fn route_module<F>(mut self, path: impl Into<std::path::PathBuf>, module: F) -> Self
    where
        F: Fn(&mut R, &O) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.registry.register(path, module);
        self
    }

    /// Validate the options and build the loader. Touches no files.
    pub fn build(self) -> Result<Loader<R, O>, ConfigurationError> {
        let router_factory = self
            .router_factory
            .ok_or(ConfigurationError::MissingRouterFactory)?;

        validate_config(&self.config).map_err(ConfigurationError::Invalid)?;

        let LoaderConfig {
            directory_white_list,
            directory_black_list,
            routes_file_name_pattern,
            route_options,
        } = self.config;

        let route_file_matcher: Arc<dyn Matcher> = match self.route_file_matcher {
            Some(matcher) => matcher,
            None => {
                let matcher = PatternMatcher::new(&routes_file_name_pattern).map_err(|e| {
                    ConfigurationError::Invalid(vec![ValidationError::InvalidPattern {
                        pattern: routes_file_name_pattern.clone(),
                        reason: e.to_string(),
                    }])
                })?;
                Arc::new(matcher)
            }
        };

        let directories = DirectoryFilter::new(directory_white_list, directory_black_list);
        let inert = directories.inert_black_list_entries();
        if !inert.is_empty() {
            tracing::debug!(entries = ?inert, "Blacklisted directories are not whitelisted and have no effect");
        }

        tracing::debug!(
            matcher = ?route_file_matcher,
            modules = self.registry.len(),
            "Route loader configured"
        );

        Ok(Loader::from_parts(
            router_factory,
            directories,
            route_file_matcher,
            route_options,
            self.registry,
        ))
    }
}
