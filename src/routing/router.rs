//! Router capability and router construction.
//!
//! # Responsibilities
//! - Define the narrow interface the loader needs from a router
//! - Produce fresh, empty routers on demand
//!
//! # Design Decisions
//! - The loader never inspects a router; it only mounts children and hands
//!   routers to route modules
//! - Factories must be cheap: a router created for an empty directory is
//!   dropped without being mounted

/// A router that can have child routers mounted under a path segment.
pub trait Router: Sized {
    /// Attach a fully populated `child` under `segment`.
    ///
    /// `segment` is a bare directory name without slashes.
    fn mount(&mut self, segment: &str, child: Self);
}

/// Produces new, empty routers.
pub trait RouterFactory<R>: Send + Sync {
    fn create(&self) -> R;
}

impl<R, F> RouterFactory<R> for F
where
    F: Fn() -> R + Send + Sync,
{
    fn create(&self) -> R {
        self()
    }
}
