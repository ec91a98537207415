//! Axum integration.
//!
//! `axum::Router` is a by-value builder, so mounting swaps the router out,
//! nests the child at `/{segment}` and puts the result back.
//!
//! `nest` panics on route syntax, so segments must be plain names. Option
//! validation rejects directory names with braces or a leading `:` or `*`.

use axum::Router as AxumRouter;

use crate::routing::router::Router;

impl<S> Router for AxumRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn mount(&mut self, segment: &str, child: Self) {
        let parent = std::mem::take(self);
        *self = parent.nest(&format!("/{}", segment), child);
    }
}

/// Apply axum's by-value builder methods to a borrowed router.
///
/// ```ignore
/// registry.register("auth/routes.rs", |router: &mut axum::Router, _: &toml::Table| {
///     with_routes(router, |r| r.route("/", get(login)));
///     Ok(())
/// });
/// ```
pub fn with_routes<S, F>(router: &mut AxumRouter<S>, build: F)
where
    S: Clone + Send + Sync + 'static,
    F: FnOnce(AxumRouter<S>) -> AxumRouter<S>,
{
    let current = std::mem::take(router);
    *router = build(current);
}
