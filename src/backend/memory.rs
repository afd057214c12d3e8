//! In-memory recording backend.

use crate::backend::Backend;
use crate::caller::Caller;
use crate::level::Level;
use crate::record::Record;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Mutex;

/// A record captured by [`MemoryBackend`], with the error rendered to a
/// string so the capture owns its data.
#[derive(Debug, Clone)]
pub struct CapturedRecord {
    /// Logger name the record was emitted under.
    pub name: String,
    /// Severity of the record.
    pub level: Level,
    /// The formatted message.
    pub message: String,
    /// Rendered error, when one was attached.
    pub error: Option<String>,
    /// Resolved call site, when attribution succeeded.
    pub caller: Option<Caller>,
}

/// Backend that records everything at or above a level threshold.
///
/// Built for tests: set the threshold, drive the facade, then inspect
/// exactly which records arrived. The threshold is an atomic so it can
/// be flipped mid-test without interior locking on the enablement path.
#[derive(Debug)]
pub struct MemoryBackend {
    /// Minimum enabled level, stored as the `Level` discriminant
    threshold: AtomicU8,
    /// Records captured so far, oldest first
    records: Mutex<Vec<CapturedRecord>>,
}

impl MemoryBackend {
    /// Creates a backend enabled at `threshold` and above.
    pub fn new(threshold: Level) -> Self {
        Self {
            threshold: AtomicU8::new(threshold as u8),
            records: Mutex::new(Vec::new()),
        }
    }

    /// Changes the enablement threshold.
    pub fn set_threshold(&self, threshold: Level) {
        self.threshold.store(threshold as u8, Ordering::Release);
    }

    /// Returns a snapshot of every captured record, oldest first.
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records
            .lock()
            .expect("memory backend records mutex poisoned")
            .clone()
    }

    /// Number of records captured so far.
    pub fn record_count(&self) -> usize {
        self.records
            .lock()
            .expect("memory backend records mutex poisoned")
            .len()
    }

    /// Discards every captured record, keeping the threshold.
    pub fn clear(&self) {
        self.records
            .lock()
            .expect("memory backend records mutex poisoned")
            .clear();
    }
}

impl Default for MemoryBackend {
    /// Records everything.
    fn default() -> Self {
        Self::new(Level::Trace)
    }
}

impl Backend for MemoryBackend {
    #[inline]
    fn enabled(&self, _name: &str, level: Level) -> bool {
        level as u8 >= self.threshold.load(Ordering::Acquire)
    }

    fn emit(&self, name: &str, record: &Record<'_>) {
        let captured = CapturedRecord {
            name: name.to_string(),
            level: record.level,
            message: record.message.clone(),
            error: record.error.map(|e| e.to_string()),
            caller: record.caller.clone(),
        };
        self.records
            .lock()
            .expect("memory backend records mutex poisoned")
            .push(captured);
    }
}
