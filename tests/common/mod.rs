//! Shared fixtures for route loading tests.

use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use route_tree_loader::{RouteRegistry, RouteTree};
use tempfile::TempDir;

/// Create an empty file, and its parent directories, under `root`.
pub fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

/// Build the standard route directory:
///
/// ```text
/// auth/routes.rs
/// account/routes.rs
/// blackList/routes.rs
/// foo/
/// bar/baz
/// bar/quux
/// bar/api.rs
/// ```
pub fn route_fixture() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "auth/routes.rs");
    touch(dir.path(), "account/routes.rs");
    touch(dir.path(), "blackList/routes.rs");
    fs::create_dir_all(dir.path().join("foo")).unwrap();
    touch(dir.path(), "bar/baz");
    touch(dir.path(), "bar/quux");
    touch(dir.path(), "bar/api.rs");
    dir
}

/// Names of the route modules invoked so far, in call order.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct Invocations(Arc<Mutex<Vec<String>>>);

#[allow(dead_code)]
impl Invocations {
    pub fn names(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.0.lock().unwrap().iter().filter(|n| *n == name).count()
    }

    pub fn record(&self, name: &str) {
        self.0.lock().unwrap().push(name.to_string());
    }
}

/// Registry for [`route_fixture`]: every module records its directory name
/// and registers `GET ""`.
#[allow(dead_code)]
pub fn fixture_registry(invocations: &Invocations) -> RouteRegistry<RouteTree> {
    let mut registry: RouteRegistry<RouteTree> = RouteRegistry::new();
    for (path, name) in [
        ("auth/routes.rs", "auth"),
        ("account/routes.rs", "account"),
        ("blackList/routes.rs", "blackList"),
        ("bar/api.rs", "bar"),
    ] {
        let invocations = invocations.clone();
        registry.register(path, move |router: &mut RouteTree, _: &toml::Table| {
            invocations.record(name);
            router.get("");
            Ok(())
        });
    }
    registry
}
