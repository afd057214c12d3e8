//! Per-name logger cache.
//!
//! The registry guarantees name -> handle uniqueness under concurrent
//! access: cache hits never block, and first-insertion races are
//! resolved with an insert-if-absent on the shard holding the name.
//! Losing candidates are discarded, which is safe because constructing
//! a handle only wraps a name and a backend pointer.
//!
//! The cache grows monotonically, bounded by the number of distinct
//! names requested over the process lifetime, and is never torn down.

use crate::backend::{Backend, TracingBackend};
use crate::logger::Log;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::{Arc, OnceLock};

/// Process-wide registry instance, see [`Registry::global`].
static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Cache of named logger handles bound to one backend.
pub struct Registry {
    /// Handles indexed by channel name
    loggers: DashMap<String, Arc<Log>>,
    /// Backend every minted handle delegates to
    backend: Arc<dyn Backend>,
}

impl Registry {
    /// Creates an empty registry whose handles delegate to `backend`.
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            loggers: DashMap::new(),
            backend,
        }
    }

    /// The process-wide registry, bound to [`TracingBackend`].
    ///
    /// Initialized empty on first use and never torn down. Installing
    /// and configuring a tracing subscriber stays the application's
    /// responsibility; this registry never self-configures.
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(|| Registry::new(Arc::new(TracingBackend::new())))
    }

    /// Returns the handle for `name`, constructing and caching one if
    /// absent.
    ///
    /// Repeated calls with equal names return the identical cached
    /// instance. Concurrent first-time calls for the same name may each
    /// construct a candidate, but exactly one wins the insert and every
    /// caller observes the surviving handle.
    pub fn get(&self, name: &str) -> Arc<Log> {
        if let Some(existing) = self.loggers.get(name) {
            return Arc::clone(existing.value());
        }

        // Construct outside the map entry so the shard lock never spans
        // handle construction.
        let candidate = Arc::new(Log::new(name, Arc::clone(&self.backend)));
        match self.loggers.entry(name.to_owned()) {
            Entry::Occupied(entry) => Arc::clone(entry.get()),
            Entry::Vacant(entry) => {
                entry.insert(Arc::clone(&candidate));
                tracing::debug!(name = name, "Created logger handle");
                candidate
            }
        }
    }

    /// Returns the handle named after the canonical fully-qualified
    /// path of `T`.
    ///
    /// Thin adapter over [`Registry::get`] for the common case of one
    /// logging channel per component type.
    pub fn get_for<T: ?Sized>(&self) -> Arc<Log> {
        self.get(std::any::type_name::<T>())
    }

    /// Number of distinct names cached so far.
    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    /// Whether no handle has been requested yet.
    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }
}
