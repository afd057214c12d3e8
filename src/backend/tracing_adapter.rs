//! Tracing library adapter implementation.

use crate::backend::Backend;
use crate::level::Level;
use crate::record::Record;
use tracing::field::display;

/// Backend that delegates to the `tracing` crate.
///
/// This adapter bridges the facade to the `tracing` ecosystem: whatever
/// subscriber the host application installed decides filtering, output
/// format, and sinks. The logger name, the attached error, and the
/// resolved call site travel as structured fields on the event.
///
/// `tracing` filters by a static target, so enablement here is
/// per-level under the `"logbridge"` target; per-name policy inside a
/// subscriber is the subscriber's concern.
///
/// # Example
///
/// ```ignore
/// use logbridge::{Registry, TracingBackend};
/// use std::sync::Arc;
///
/// // Assumes a tracing subscriber is already installed
/// let registry = Registry::new(Arc::new(TracingBackend::new()));
/// let log = registry.get("svc.worker");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBackend;

impl TracingBackend {
    /// Create a new tracing backend adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Backend for TracingBackend {
    fn enabled(&self, _name: &str, level: Level) -> bool {
        match level {
            Level::Trace => tracing::enabled!(target: "logbridge", tracing::Level::TRACE),
            Level::Debug => tracing::enabled!(target: "logbridge", tracing::Level::DEBUG),
            Level::Info => tracing::enabled!(target: "logbridge", tracing::Level::INFO),
            Level::Warn => tracing::enabled!(target: "logbridge", tracing::Level::WARN),
            Level::Error => tracing::enabled!(target: "logbridge", tracing::Level::ERROR),
        }
    }

    fn emit(&self, name: &str, record: &Record<'_>) {
        let source_type = record.caller.as_ref().map(|c| c.type_name.as_str());
        let source_method = record.caller.as_ref().map(|c| c.method_name.as_str());
        let error = record.error.map(display);

        match record.level {
            Level::Trace => tracing::event!(
                target: "logbridge",
                tracing::Level::TRACE,
                logger = name,
                source_type,
                source_method,
                error,
                "{}",
                record.message
            ),
            Level::Debug => tracing::event!(
                target: "logbridge",
                tracing::Level::DEBUG,
                logger = name,
                source_type,
                source_method,
                error,
                "{}",
                record.message
            ),
            Level::Info => tracing::event!(
                target: "logbridge",
                tracing::Level::INFO,
                logger = name,
                source_type,
                source_method,
                error,
                "{}",
                record.message
            ),
            Level::Warn => tracing::event!(
                target: "logbridge",
                tracing::Level::WARN,
                logger = name,
                source_type,
                source_method,
                error,
                "{}",
                record.message
            ),
            Level::Error => tracing::event!(
                target: "logbridge",
                tracing::Level::ERROR,
                logger = name,
                source_type,
                source_method,
                error,
                "{}",
                record.message
            ),
        }
    }
}
