//! Diagnostic-emission contract: which paths log, which stay silent.
//!
//! These run as an integration binary so the capturing logger owns the
//! process-global `log` slot without competing with unit tests.

use std::ptr;
use std::sync::Mutex;

use log::Level;
use sluice_alloc::{natural_alignment, MemoryResource, SystemResource};
use sluice_test_utils::CapturingLogger;

// The logger is process-global; every test that counts records
// serializes here.
static GUARD: Mutex<()> = Mutex::new(());

#[test]
fn zero_byte_allocate_stays_silent() {
    let _guard = GUARD.lock().unwrap_or_else(|e| e.into_inner());
    let logger = CapturingLogger::install();
    logger.clear();

    assert!(SystemResource.allocate(0, 64).is_null());

    assert_eq!(logger.count_at_least(Level::Error), 0);
    assert!(logger.snapshot().is_empty());
}

#[test]
fn bad_alignment_allocate_emits_exactly_one_error() {
    let _guard = GUARD.lock().unwrap_or_else(|e| e.into_inner());
    let logger = CapturingLogger::install();
    logger.clear();

    assert!(SystemResource.allocate(64, 24).is_null());

    assert_eq!(logger.count_at_least(Level::Error), 1);
    let records = logger.snapshot();
    assert!(records[0].message.contains("alignment = 24"));
    assert!(records[0].message.contains("bytes = 64"));
}

#[test]
fn zero_alignment_allocate_emits_exactly_one_error() {
    let _guard = GUARD.lock().unwrap_or_else(|e| e.into_inner());
    let logger = CapturingLogger::install();
    logger.clear();

    assert!(SystemResource.allocate(64, 0).is_null());

    assert_eq!(logger.count_at_least(Level::Error), 1);
}

#[test]
fn successful_roundtrips_stay_silent() {
    let _guard = GUARD.lock().unwrap_or_else(|e| e.into_inner());
    let logger = CapturingLogger::install();
    logger.clear();

    let heap = SystemResource;
    for alignment in [1, 8, natural_alignment(), natural_alignment() * 4, 4096] {
        let ptr = heap.allocate(128, alignment);
        assert!(!ptr.is_null());
        // SAFETY: same geometry as the allocate call above.
        unsafe { heap.deallocate(ptr, 128, alignment) };
    }

    assert!(logger.snapshot().is_empty());
}

#[test]
fn bad_geometry_deallocate_emits_exactly_one_error() {
    let _guard = GUARD.lock().unwrap_or_else(|e| e.into_inner());
    let logger = CapturingLogger::install();
    logger.clear();

    let mut slot = 0u8;
    // SAFETY: the bad alignment short-circuits before any release
    // routine runs.
    unsafe { SystemResource.deallocate(&mut slot, 1, 24) };

    assert_eq!(logger.count_at_least(Level::Error), 1);
    assert!(logger.snapshot()[0].message.contains("deallocate"));
}

#[test]
fn null_deallocate_stays_silent_even_with_bad_geometry() {
    let _guard = GUARD.lock().unwrap_or_else(|e| e.into_inner());
    let logger = CapturingLogger::install();
    logger.clear();

    // SAFETY: null is explicitly a no-op, whatever the geometry.
    unsafe { SystemResource.deallocate(ptr::null_mut(), 64, 24) };

    assert!(logger.snapshot().is_empty());
}
