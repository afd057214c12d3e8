//! No-operation backend.

use crate::backend::Backend;
use crate::level::Level;
use crate::record::Record;

/// A backend that reports every level disabled and discards emissions.
///
/// Useful for:
/// - Unit tests where log output would be noise
/// - Benchmarks where logging overhead should be eliminated
/// - Silent operation modes
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBackend;

impl NoopBackend {
    /// Create a new no-op backend.
    pub fn new() -> Self {
        Self
    }
}

impl Backend for NoopBackend {
    #[inline]
    fn enabled(&self, _name: &str, _level: Level) -> bool {
        false
    }

    #[inline]
    fn emit(&self, _name: &str, _record: &Record<'_>) {}
}
