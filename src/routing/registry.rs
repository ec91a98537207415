//! Route module registry.
//!
//! Route modules are statically linked functions. The registry maps the
//! path of each route file, relative to the root directory handed to the
//! loader, to the function that registers its routes. A file found on disk
//! is only a marker; the code that runs is whatever the registry holds for
//! that path.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Error type returned by route modules.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A unit of route registration code.
pub trait RouteModule<R, O>: Send + Sync {
    /// Register routes on `router`. `options` is the loader's route options.
    fn register(&self, router: &mut R, options: &O) -> Result<(), BoxError>;
}

impl<R, O, F> RouteModule<R, O> for F
where
    F: Fn(&mut R, &O) -> Result<(), BoxError> + Send + Sync,
{
    fn register(&self, router: &mut R, options: &O) -> Result<(), BoxError> {
        self(router, options)
    }
}

/// Lookup table from relative route file path to route module.
pub struct RouteRegistry<R, O = toml::Table> {
    modules: HashMap<PathBuf, Arc<dyn RouteModule<R, O>>>,
}

impl<R, O> RouteRegistry<R, O> {
    pub fn new() -> Self {
        Self {
            modules: HashMap::new(),
        }
    }

    /// Register a function as the route module for `path`.
    ///
    /// A second registration for the same path replaces the first.
    pub fn register<F>(&mut self, path: impl Into<PathBuf>, module: F) -> &mut Self
    where
        F: Fn(&mut R, &O) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.modules.insert(path.into(), Arc::new(module));
        self
    }

    /// Register any [`RouteModule`] implementation for `path`.
    pub fn register_module<M>(&mut self, path: impl Into<PathBuf>, module: M) -> &mut Self
    where
        M: RouteModule<R, O> + 'static,
    {
        self.modules.insert(path.into(), Arc::new(module));
        self
    }

    /// By-value variant of [`register`](Self::register) for chaining.
    pub fn with<F>(mut self, path: impl Into<PathBuf>, module: F) -> Self
    where
        F: Fn(&mut R, &O) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.register(path, module);
        self
    }

    pub fn get(&self, path: &Path) -> Option<&dyn RouteModule<R, O>> {
        self.modules.get(path).map(|m| m.as_ref())
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.modules.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Registered paths in sorted order.
    pub fn paths(&self) -> Vec<&Path> {
        let mut paths: Vec<&Path> = self.modules.keys().map(PathBuf::as_path).collect();
        paths.sort();
        paths
    }
}

impl<R, O> Default for RouteRegistry<R, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, O> Clone for RouteRegistry<R, O> {
    fn clone(&self) -> Self {
        Self {
            modules: self.modules.clone(),
        }
    }
}

impl<R, O> fmt::Debug for RouteRegistry<R, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteRegistry")
            .field("paths", &self.paths())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Health;

    impl RouteModule<Vec<String>, String> for Health {
        fn register(&self, router: &mut Vec<String>, options: &String) -> Result<(), BoxError> {
            router.push(format!("{}/health", options));
            Ok(())
        }
    }

    #[test]
    fn test_register_and_invoke() {
        let mut registry: RouteRegistry<Vec<String>, String> = RouteRegistry::new();
        registry
            .register("auth/routes.rs", |router: &mut Vec<String>, _: &String| {
                router.push("login".into());
                Ok(())
            })
            .register_module("routes.rs", Health);

        assert_eq!(registry.len(), 2);
        assert!(registry.contains(Path::new("auth/routes.rs")));
        assert_eq!(
            registry.paths(),
            vec![Path::new("auth/routes.rs"), Path::new("routes.rs")]
        );

        let mut router = Vec::new();
        let options = "/v1".to_string();
        registry
            .get(Path::new("routes.rs"))
            .unwrap()
            .register(&mut router, &options)
            .unwrap();
        registry
            .get(Path::new("auth/routes.rs"))
            .unwrap()
            .register(&mut router, &options)
            .unwrap();

        assert_eq!(router, vec!["/v1/health", "login"]);
    }

    #[test]
    fn test_keys_compare_by_component() {
        let registry: RouteRegistry<Vec<String>, String> =
            RouteRegistry::new().with("auth//routes.rs", |_: &mut Vec<String>, _: &String| Ok(()));

        assert!(registry.contains(&Path::new("auth").join("routes.rs")));
        assert!(registry.get(Path::new("account/routes.rs")).is_none());
    }

    #[test]
    fn test_module_error_is_returned() {
        let registry: RouteRegistry<Vec<String>, String> = RouteRegistry::new()
            .with("routes.rs", |_: &mut Vec<String>, _: &String| Err("boom".into()));

        let err = registry
            .get(Path::new("routes.rs"))
            .unwrap()
            .register(&mut Vec::new(), &String::new())
            .unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }
}
