//! Logbridge - named leveled loggers with caller attribution
//!
//! This library provides a small logging facade: a per-name cache of
//! logger handles ([`Registry`]), each handle ([`Log`]) delegating to a
//! pluggable backend behind the [`Backend`] trait. When a level is
//! enabled, the facade formats the message, walks the call stack to
//! attribute the record to the true call site rather than its own
//! methods, and hands exactly one record to the backend.
//!
//! # High-Level API
//!
//! ```
//! use logbridge::{Level, MemoryBackend, Registry};
//! use logbridge::log_info;
//! use std::sync::Arc;
//!
//! let backend = Arc::new(MemoryBackend::new(Level::Debug));
//! let registry = Registry::new(backend.clone());
//!
//! let log = registry.get("svc.worker");
//! log_info!(log, "started with {} workers", 4);
//!
//! let records = backend.records();
//! assert_eq!(records[0].message, "started with 4 workers");
//! ```
//!
//! Production code typically uses [`Registry::global`], whose handles
//! emit through the `tracing` ecosystem; installing a subscriber is the
//! application's concern.

pub mod backend;
pub mod caller;
pub mod level;
pub mod logger;
pub mod record;
pub mod registry;

pub use backend::{Backend, CapturedRecord, MemoryBackend, NoopBackend, TracingBackend};
pub use caller::{capture_frames, locate_caller, Caller, Frame};
pub use level::{Level, ParseLevelError};
pub use logger::Log;
pub use record::Record;
pub use registry::Registry;

/// Version of the logbridge library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
