//! Route directory watcher for hot reload.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use notify::{Watcher, RecursiveMode, Event, RecommendedWatcher, Config};
use tokio::sync::mpsc;
use crate::loader::tree_loader::Loader;
use crate::routing::router::Router;

/// A watcher that rebuilds the router whenever the route directory changes.
pub struct RouteTreeWatcher<R, O = toml::Table> {
    root: PathBuf,
    loader: Arc<Loader<R, O>>,
    update_tx: mpsc::UnboundedSender<R>,
}

impl<R, O> RouteTreeWatcher<R, O>
where
    R: Router + Send + 'static,
    O: Send + Sync + 'static,
{
    /// Create a new RouteTreeWatcher.
    ///
    /// Returns the watcher and a receiver for freshly loaded routers.
    pub fn new(root: &Path, loader: Arc<Loader<R, O>>) -> (Self, mpsc::UnboundedReceiver<R>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (Self {
            root: root.to_path_buf(),
            loader,
            update_tx,
        }, update_rx)
    }

    /// Start watching the directory tree in a background thread.
    ///
    /// Routers are only sent for loads that succeed; the returned handle
    /// stops watching when dropped.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx.clone();
        let root = self.root.clone();
        let loader = self.loader.clone();

        let mut watcher = RecommendedWatcher::new(move |res: notify::Result<Event>| {
            match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() || event.kind.is_remove() {
                        tracing::info!(paths = ?event.paths, "Route directory change detected, reloading...");
                        let mut router = loader.new_router();
                        match loader.load_routes(&root, &mut router) {
                            Ok(_) => {
                                let _ = tx.send(router);
                            }
                            Err(e) => {
                                tracing::error!("Failed to reload routes: {}. Keeping current router.", e);
                            }
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            }
        }, Config::default().with_poll_interval(Duration::from_secs(2)))?;

        watcher.watch(&self.root, RecursiveMode::Recursive)?;

        tracing::info!(path = ?self.root, "Route watcher started");
        Ok(watcher)
    }
}
