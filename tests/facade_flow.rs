//! Integration tests for the full facade flow through the public API:
//! registry lookup, level gating, message formatting, error attachment,
//! and caller attribution as seen by an external crate.

use logbridge::{log_debug, log_error, log_info};
use logbridge::{Level, MemoryBackend, Registry};
use std::io;
use std::sync::Arc;

fn recording_registry(threshold: Level) -> (Arc<MemoryBackend>, Registry) {
    let backend = Arc::new(MemoryBackend::new(threshold));
    let registry = Registry::new(backend.clone());
    (backend, registry)
}

#[test]
fn disabled_then_enabled_debug_scenario() {
    let (backend, registry) = recording_registry(Level::Info);

    let log = registry.get("svc.worker");
    let again = registry.get("svc.worker");
    assert!(Arc::ptr_eq(&log, &again));

    // Threshold info: the debug call costs nothing and emits nothing.
    assert!(!log.is_debug_enabled());
    log_debug!(log, "x={}", 5);
    assert_eq!(backend.record_count(), 0);

    // Threshold debug: the same call delivers exactly one record.
    backend.set_threshold(Level::Debug);
    assert!(log.is_debug_enabled());
    log_debug!(log, "x={}", 5);

    let records = backend.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "svc.worker");
    assert_eq!(records[0].message, "x=5");
    assert!(records[0].error.is_none());
}

#[test]
fn error_carrying_call_attaches_error() {
    let (backend, registry) = recording_registry(Level::Trace);
    let log = registry.get("svc.dialer");

    let err = io::Error::new(io::ErrorKind::TimedOut, "handshake timed out");
    log_error!(log, err: err, "dial attempt {} failed", 3);

    let records = backend.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "dial attempt 3 failed");
    assert_eq!(records[0].error.as_deref(), Some("handshake timed out"));
}

#[test]
fn attribution_points_at_external_caller() {
    let (backend, registry) = recording_registry(Level::Trace);
    let log = registry.get("svc.worker");

    log_info!(log, "attributed from integration test");

    let records = backend.records();
    assert_eq!(records.len(), 1);
    let caller = records[0]
        .caller
        .as_ref()
        .expect("caller attribution missing in a debug test build");
    assert!(
        !caller.type_name.contains("logbridge::logger"),
        "record attributed to the facade itself: {}",
        caller.type_name
    );
    assert!(
        caller.method_name.contains("attribution_points_at_external_caller"),
        "unexpected caller method: {}",
        caller.method_name
    );
}

#[test]
fn handles_for_types_and_names_coexist() {
    struct Uploader;

    let (backend, registry) = recording_registry(Level::Trace);

    let by_type = registry.get_for::<Uploader>();
    let by_name = registry.get("svc.uploader");
    assert!(!Arc::ptr_eq(&by_type, &by_name));

    log_info!(by_type, "typed channel");
    log_info!(by_name, "named channel");

    let records = backend.records();
    assert_eq!(records.len(), 2);
    assert!(records[0].name.ends_with("Uploader"));
    assert_eq!(records[1].name, "svc.uploader");
}
