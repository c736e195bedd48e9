//! Test utilities for Sluice development.
//!
//! Provides [`CapturingLogger`], a process-global `log::Log`
//! implementation that records every emitted record so tests can assert
//! on the diagnostics a code path produced — or prove it stayed silent.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::{Mutex, MutexGuard, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// One captured log record.
#[derive(Clone, Debug)]
pub struct CapturedRecord {
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// A `log::Log` sink that stores records for later inspection.
///
/// Install once per test process with [`install`](CapturingLogger::install);
/// tests that count records should serialize on a shared mutex and
/// [`clear`](CapturingLogger::clear) before exercising the code under
/// test.
pub struct CapturingLogger {
    records: Mutex<Vec<CapturedRecord>>,
}

impl CapturingLogger {
    /// Install the process-global capturing logger and return it.
    ///
    /// Safe to call from every test; only the first call registers the
    /// logger, later calls return the same instance.
    pub fn install() -> &'static CapturingLogger {
        static INSTANCE: OnceLock<CapturingLogger> = OnceLock::new();
        let logger = INSTANCE.get_or_init(|| CapturingLogger {
            records: Mutex::new(Vec::new()),
        });
        // A second install (or a competing logger) is fine — the
        // instance is still usable either way.
        let _ = log::set_logger(logger);
        log::set_max_level(LevelFilter::Trace);
        logger
    }

    /// Drop all captured records.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// A copy of everything captured so far.
    pub fn snapshot(&self) -> Vec<CapturedRecord> {
        self.lock().clone()
    }

    /// Number of records at `level` or more severe.
    ///
    /// `log::Level` orders `Error` lowest, so "at least as severe" is
    /// `record.level <= level`.
    pub fn count_at_least(&self, level: Level) -> usize {
        self.lock()
            .iter()
            .filter(|record| record.level <= level)
            .count()
    }

    // A panicking test poisons the mutex; the record buffer is still
    // intact, so keep serving it.
    fn lock(&self) -> MutexGuard<'_, Vec<CapturedRecord>> {
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.lock().push(CapturedRecord {
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        });
    }

    fn flush(&self) {}
}
