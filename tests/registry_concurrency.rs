//! Integration tests for registry behavior under concurrent access.
//!
//! These tests verify the insert-if-absent contract:
//! - Many threads racing a first-time `get` converge on one handle
//! - Cache hits return the identical instance from any thread
//! - Distinct names stay distinct under concurrency

use logbridge::{Level, MemoryBackend, Registry};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn concurrent_first_gets_converge_to_one_handle() {
    const THREADS: usize = 64;

    let registry = Arc::new(Registry::new(Arc::new(MemoryBackend::new(Level::Info))));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                // Release every thread at once to maximize the chance
                // of racing the first insertion.
                barrier.wait();
                registry.get("svc.contended")
            })
        })
        .collect();

    let logs: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("worker thread panicked"))
        .collect();

    let first = &logs[0];
    for log in &logs {
        assert!(Arc::ptr_eq(first, log), "a losing candidate leaked out");
    }
    assert_eq!(registry.len(), 1);
}

#[test]
fn concurrent_distinct_names_stay_distinct() {
    const THREADS: usize = 16;

    let registry = Arc::new(Registry::new(Arc::new(MemoryBackend::new(Level::Info))));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let name = format!("svc.worker.{i}");
                (name.clone(), registry.get(&name))
            })
        })
        .collect();

    let logs: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("worker thread panicked"))
        .collect();

    assert_eq!(registry.len(), THREADS);
    for (name, log) in &logs {
        assert_eq!(log.name(), name);
        // A later lookup from this thread hits the cached instance
        assert!(Arc::ptr_eq(log, &registry.get(name)));
    }
}

#[test]
fn hits_from_many_threads_return_cached_instance() {
    let registry = Arc::new(Registry::new(Arc::new(MemoryBackend::new(Level::Info))));
    let original = registry.get("svc.cached");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.get("svc.cached"))
        })
        .collect();

    for handle in handles {
        let log = handle.join().expect("worker thread panicked");
        assert!(Arc::ptr_eq(&original, &log));
    }
}
