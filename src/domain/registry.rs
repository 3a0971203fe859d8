//! Ordered collection of registered probes.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::entities::HealthCheckResponse;
use crate::domain::probe::Probe;

/// Holds every probe contributed by the application, in registration order.
///
/// The registry is created once at startup and shared by reference
/// (`Arc<HealthRegistry>`) with every component that contributes a probe and
/// with the HTTP handler that runs them. It only grows, except through
/// [`HealthRegistry::initialize`].
///
/// Probes run against a snapshot of the list taken when [`run_checks`] starts;
/// the lock is not held while a probe executes. Probes added during a run are
/// seen by the next run.
///
/// [`run_checks`]: HealthRegistry::run_checks
#[derive(Default)]
pub struct HealthRegistry {
    probes: RwLock<Vec<Arc<dyn Probe>>>,
}

impl HealthRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards every registered probe.
    pub fn initialize(&self) {
        self.write().clear();
    }

    /// Appends a probe to the end of the list.
    pub fn add_check<P>(&self, probe: P)
    where
        P: Probe + 'static,
    {
        self.write().push(Arc::new(probe));
    }

    /// Returns the number of registered probes.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Invokes every probe sequentially, in registration order.
    ///
    /// The returned results are in the same order as the probes.
    pub fn run_checks(&self) -> Vec<HealthCheckResponse> {
        let probes = self.read().clone();
        probes.iter().map(|probe| probe.check()).collect()
    }

    // A panic can only poison the lock while a push or clear is in progress,
    // neither of which leaves the Vec inconsistent.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Arc<dyn Probe>>> {
        self.probes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Arc<dyn Probe>>> {
        self.probes.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for HealthRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HealthRegistry")
            .field("probes", &self.len())
            .finish()
    }
}
