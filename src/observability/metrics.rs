//! Metrics collection.
//!
//! # Metrics
//! - `route_loader_loads_total` (counter): `load_routes` calls by outcome
//! - `route_loader_load_duration_seconds` (histogram): time per load
//! - `route_loader_modules_invoked_total` (counter): route modules run
//! - `route_loader_routers_mounted_total` (counter): sub-routers mounted
//! - `route_loader_subtrees_pruned_total` (counter): admitted directories
//!   that contributed no routes
//!
//! No exporter is installed here; the embedding application chooses one.

use std::time::Instant;

use metrics::{counter, histogram};

/// Record a finished `load_routes` call.
pub fn record_load(outcome: &'static str, start_time: Instant) {
    counter!("route_loader_loads_total", "outcome" => outcome).increment(1);
    histogram!("route_loader_load_duration_seconds").record(start_time.elapsed().as_secs_f64());
}

pub fn record_module_invoked() {
    counter!("route_loader_modules_invoked_total").increment(1);
}

pub fn record_router_mounted() {
    counter!("route_loader_routers_mounted_total").increment(1);
}

pub fn record_subtree_pruned() {
    counter!("route_loader_subtrees_pruned_total").increment(1);
}
