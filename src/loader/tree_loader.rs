//! Recursive directory traversal and mounting.
//!
//! # Responsibilities
//! - List a directory and classify each entry
//! - Descend into admitted directories with a fresh router
//! - Mount a sub-router only if its subtree registered something
//! - Invoke registered route modules for matching files
//!
//! # Design Decisions
//! - Entries are visited in file name order for repeatable mounts
//! - No caching: every call re-reads the filesystem
//! - No recovery: the first error aborts the whole load, and mounts made
//!   before it stay in place

use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::config::schema::LoaderConfig;
use crate::loader::builder::LoaderBuilder;
use crate::loader::error::{ConfigurationError, LoadError, LoadResult};
use crate::observability::metrics;
use crate::routing::matcher::{DirectoryFilter, Matcher};
use crate::routing::registry::RouteRegistry;
use crate::routing::router::{Router, RouterFactory};

/// Discovers route modules in a directory tree and mounts them on a router.
pub struct Loader<R, O = toml::Table> {
    router_factory: Arc<dyn RouterFactory<R>>,
    directories: DirectoryFilter,
    route_file_matcher: Arc<dyn Matcher>,
    route_options: O,
    registry: RouteRegistry<R, O>,
}

impl<R, O: Default> Loader<R, O> {
    pub fn builder() -> LoaderBuilder<R, O> {
        LoaderBuilder::new()
    }
}

impl<R, O> Loader<R, O> {
    /// Create a loader from a router factory, options and a registry.
    ///
    /// Fails with [`ConfigurationError::MissingRouterFactory`] if `router_factory`
    /// is `None`.
    pub fn create<F>(
        router_factory: Option<F>,
        options: LoaderConfig<O>,
        registry: RouteRegistry<R, O>,
    ) -> Result<Self, ConfigurationError>
    where
        F: Fn() -> R + Send + Sync + 'static,
        O: Default,
    {
        let builder = LoaderBuilder::new().options(options).registry(registry);
        match router_factory {
            Some(factory) => builder.router_factory(factory).build(),
            None => builder.build(),
        }
    }

    pub(crate) fn from_parts(
        router_factory: Arc<dyn RouterFactory<R>>,
        directories: DirectoryFilter,
        route_file_matcher: Arc<dyn Matcher>,
        route_options: O,
        registry: RouteRegistry<R, O>,
    ) -> Self {
        Self {
            router_factory,
            directories,
            route_file_matcher,
            route_options,
            registry,
        }
    }

    /// A new empty router from the configured factory.
    pub fn new_router(&self) -> R {
        self.router_factory.create()
    }

    pub fn route_options(&self) -> &O {
        &self.route_options
    }

    pub fn registry(&self) -> &RouteRegistry<R, O> {
        &self.registry
    }

    /// Whether a directory with this name would be descended into.
    pub fn is_admitted_directory(&self, name: &str) -> bool {
        self.directories.admits(name)
    }

    /// Whether a file with this name would be loaded as a route module.
    pub fn is_route_file(&self, name: &str) -> bool {
        self.route_file_matcher.matches(name)
    }
}

impl<R: Router, O> Loader<R, O> {
    /// Populate `router` with the routes found under `root`.
    ///
    /// Returns `Ok(true)` if at least one route module was invoked anywhere in
    /// the tree. Passing `None` as the router fails with
    /// [`ConfigurationError::MissingRouter`].
    pub fn load_routes<'r>(
        &self,
        root: impl AsRef<Path>,
        router: impl Into<Option<&'r mut R>>,
    ) -> LoadResult<bool>
    where
        R: 'r,
    {
        let router = router.into().ok_or(ConfigurationError::MissingRouter)?;
        let root = root.as_ref();
        let started = Instant::now();

        let span = tracing::info_span!("load_routes", root = %root.display());
        let _enter = span.enter();

        let result = self.load_dir(root, Path::new(""), router);
        match &result {
            Ok(has_routes) => {
                metrics::record_load("ok", started);
                tracing::info!(
                    has_routes = *has_routes,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Route tree loaded"
                );
            }
            Err(e) => {
                metrics::record_load("error", started);
                tracing::warn!(error = %e, "Route tree load aborted");
            }
        }
        result
    }

    fn load_dir(&self, root: &Path, relative: &Path, router: &mut R) -> LoadResult<bool> {
        let dir = if relative.as_os_str().is_empty() {
            root.to_path_buf()
        } else {
            root.join(relative)
        };
        let mut has_routes = false;

        for name in read_dir_sorted(&dir)? {
            let Some(name_str) = name.to_str() else {
                tracing::trace!(entry = ?name, "Skipping non UTF-8 entry");
                continue;
            };

            let child_relative = relative.join(name_str);
            let child_path = dir.join(name_str);
            let metadata = fs::metadata(&child_path).map_err(|source| LoadError::Filesystem {
                path: child_path.clone(),
                source,
            })?;

            if metadata.is_dir() {
                if !self.directories.admits(name_str) {
                    tracing::trace!(path = %child_relative.display(), "Skipping directory");
                    continue;
                }

                let mut sub_router = self.router_factory.create();
                if self.load_dir(root, &child_relative, &mut sub_router)? {
                    router.mount(name_str, sub_router);
                    metrics::record_router_mounted();
                    tracing::debug!(path = %child_relative.display(), segment = name_str, "Mounted router");
                    has_routes = true;
                } else {
                    metrics::record_subtree_pruned();
                    tracing::debug!(path = %child_relative.display(), "Pruned empty directory");
                }
            } else if metadata.is_file() && self.route_file_matcher.matches(name_str) {
                self.invoke(&child_relative, router)?;
                has_routes = true;
            }
        }

        Ok(has_routes)
    }

    fn invoke(&self, relative: &Path, router: &mut R) -> LoadResult<()> {
        let module = self
            .registry
            .get(relative)
            .ok_or_else(|| LoadError::ModuleNotRegistered {
                path: relative.to_path_buf(),
            })?;

        module
            .register(router, &self.route_options)
            .map_err(|source| LoadError::RouteModule {
                path: relative.to_path_buf(),
                source,
            })?;

        metrics::record_module_invoked();
        tracing::debug!(path = %relative.display(), "Route module registered");
        Ok(())
    }
}

fn read_dir_sorted(dir: &Path) -> LoadResult<Vec<OsString>> {
    let fs_error = |source: std::io::Error| LoadError::Filesystem {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = fs::read_dir(dir)
        .map_err(fs_error)?
        .map(|entry| entry.map(|e| e.file_name()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(fs_error)?;
    names.sort();
    Ok(names)
}

impl<R, O> std::fmt::Debug for Loader<R, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Loader")
            .field("directories", &self.directories)
            .field("route_file_matcher", &self.route_file_matcher)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
