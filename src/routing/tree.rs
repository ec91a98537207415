//! In-memory route tree.
//!
//! A [`Router`] that only records what was registered on it. Useful for
//! dry runs of a route directory and for listing the endpoints an
//! application would expose.

use serde::Serialize;

use crate::routing::router::Router;

/// A registered endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Endpoint {
    pub method: String,
    pub path: String,
}

/// A child router mounted under a segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mount {
    pub segment: String,
    pub router: RouteTree,
}

/// Recording router.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteTree {
    endpoints: Vec<Endpoint>,
    mounts: Vec<Mount>,
}

impl RouteTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an endpoint. The method is stored upper-case.
    pub fn route(&mut self, method: &str, path: &str) -> &mut Self {
        self.endpoints.push(Endpoint {
            method: method.to_uppercase(),
            path: path.to_string(),
        });
        self
    }

    pub fn get(&mut self, path: &str) -> &mut Self {
        self.route("GET", path)
    }

    pub fn post(&mut self, path: &str) -> &mut Self {
        self.route("POST", path)
    }

    pub fn put(&mut self, path: &str) -> &mut Self {
        self.route("PUT", path)
    }

    pub fn delete(&mut self, path: &str) -> &mut Self {
        self.route("DELETE", path)
    }

    /// Endpoints registered directly on this router.
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    pub fn mounts(&self) -> &[Mount] {
        &self.mounts
    }

    /// Mounted segment names, in mount order.
    pub fn segments(&self) -> Vec<&str> {
        self.mounts.iter().map(|m| m.segment.as_str()).collect()
    }

    /// The router mounted under `segment`, if any.
    pub fn child(&self, segment: &str) -> Option<&RouteTree> {
        self.mounts
            .iter()
            .find(|m| m.segment == segment)
            .map(|m| &m.router)
    }

    /// True if nothing was registered or mounted.
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty() && self.mounts.is_empty()
    }

    /// Flatten the tree into endpoints with full paths.
    ///
    /// Direct endpoints come first, then each mount depth-first.
    pub fn list_endpoints(&self) -> Vec<Endpoint> {
        let mut out = Vec::new();
        self.collect_endpoints("", &mut out);
        out
    }

    fn collect_endpoints(&self, prefix: &str, out: &mut Vec<Endpoint>) {
        for endpoint in &self.endpoints {
            out.push(Endpoint {
                method: endpoint.method.clone(),
                path: join_path(prefix, &endpoint.path),
            });
        }
        for mount in &self.mounts {
            let prefix = format!("{}/{}", prefix, mount.segment);
            mount.router.collect_endpoints(&prefix, out);
        }
    }
}

impl Router for RouteTree {
    fn mount(&mut self, segment: &str, child: Self) {
        self.mounts.push(Mount {
            segment: segment.to_string(),
            router: child,
        });
    }
}

fn join_path(prefix: &str, path: &str) -> String {
    let path = path.trim_matches('/');
    match (prefix.is_empty(), path.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{}", path),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{}/{}", prefix, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(method: &str, path: &str) -> Endpoint {
        Endpoint {
            method: method.into(),
            path: path.into(),
        }
    }

    #[test]
    fn test_list_endpoints() {
        let mut admin = RouteTree::new();
        admin.get("users").delete("/users/:id");

        let mut auth = RouteTree::new();
        auth.get("").post("/login");
        auth.mount("admin", admin);

        let mut root = RouteTree::new();
        root.get("/");
        root.mount("auth", auth);

        assert_eq!(
            root.list_endpoints(),
            vec![
                endpoint("GET", "/"),
                endpoint("GET", "/auth"),
                endpoint("POST", "/auth/login"),
                endpoint("GET", "/auth/admin/users"),
                endpoint("DELETE", "/auth/admin/users/:id"),
            ]
        );
    }

    #[test]
    fn test_child_lookup() {
        let mut auth = RouteTree::new();
        auth.put("profile");

        let mut root = RouteTree::new();
        assert!(root.is_empty());
        root.mount("auth", auth);

        assert!(!root.is_empty());
        assert_eq!(root.segments(), vec!["auth"]);
        assert_eq!(root.child("auth").unwrap().endpoints(), &[endpoint("PUT", "profile")]);
        assert!(root.child("account").is_none());
    }

    #[test]
    fn test_serializes_as_json() {
        let mut auth = RouteTree::new();
        auth.route("get", "");
        let mut root = RouteTree::new();
        root.mount("auth", auth);

        let json = serde_json::to_value(&root).unwrap();
        assert_eq!(json["mounts"][0]["segment"], "auth");
        assert_eq!(json["mounts"][0]["router"]["endpoints"][0]["method"], "GET");
    }
}
