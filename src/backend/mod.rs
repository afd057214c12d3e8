//! Backend seam.
//!
//! The facade decides *whether* a level is enabled and *what* record to
//! hand off. Everything else (filtering policy, output formatting,
//! routing to sinks, configuration) belongs behind this trait.
//!
//! Shipped implementations:
//! - [`TracingBackend`]: production adapter delegating to `tracing`
//! - [`NoopBackend`]: discards everything, for silent operation
//! - [`MemoryBackend`]: records in memory, for tests

mod memory;
mod noop;
mod tracing_adapter;

pub use memory::{CapturedRecord, MemoryBackend};
pub use noop::NoopBackend;
pub use tracing_adapter::TracingBackend;

use crate::level::Level;
use crate::record::Record;

/// The logging backend a handle delegates to.
///
/// Implementations must be `Send + Sync`; one backend instance is
/// shared by every handle a registry mints.
pub trait Backend: Send + Sync {
    /// Whether records at `level` for the named channel would currently
    /// be processed by any sink.
    ///
    /// Handles consult this before doing any formatting or stack
    /// walking, so it should be cheap.
    fn enabled(&self, name: &str, level: Level) -> bool;

    /// Accepts one record for the named channel.
    ///
    /// Called only for enabled levels, exactly once per logging call.
    fn emit(&self, name: &str, record: &Record<'_>);
}
