//! Integration tests for the engine logging system
//!
//! These tests swap the global logger, so they are serialized.
//! No GPU required.
//!
//! Run with: cargo test --test logging_integration_tests

use ct_volume_engine::ctvolume::log::{LogEntry, LogSeverity, Logger};
use ct_volume_engine::log;
use ct_volume_engine::{engine_debug, engine_error, engine_info, engine_warn};
use serial_test::serial;
use std::sync::{Arc, Mutex};

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CaptureLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger_captures_macro_output() {
    let (logger, entries) = CaptureLogger::new();
    log::set_logger(logger);
    log::set_min_severity(LogSeverity::Trace);

    engine_info!("test::module", "ingested {} slices", 12);
    engine_warn!("test::module", "one slice skipped");
    engine_error!("test::module", "surface lost");

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 3);

    assert_eq!(captured[0].severity, LogSeverity::Info);
    assert_eq!(captured[0].source, "test::module");
    assert_eq!(captured[0].message, "ingested 12 slices");
    assert!(captured[0].file.is_none());

    assert_eq!(captured[1].severity, LogSeverity::Warn);
    assert_eq!(captured[1].message, "one slice skipped");

    // engine_error! carries file:line
    assert_eq!(captured[2].severity, LogSeverity::Error);
    assert!(captured[2].file.is_some());
    assert!(captured[2].line.is_some());

    drop(captured);
    log::reset_logger();
    log::set_min_severity(LogSeverity::Info);
}

#[test]
#[serial]
fn test_integration_min_severity_filters_low_levels() {
    let (logger, entries) = CaptureLogger::new();
    log::set_logger(logger);
    log::set_min_severity(LogSeverity::Warn);

    engine_debug!("test::filter", "dropped");
    engine_info!("test::filter", "dropped too");
    engine_warn!("test::filter", "kept");
    engine_error!("test::filter", "kept as well");

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].severity, LogSeverity::Warn);
    assert_eq!(captured[1].severity, LogSeverity::Error);

    drop(captured);
    log::reset_logger();
    log::set_min_severity(LogSeverity::Info);
}

#[test]
#[serial]
fn test_integration_dispatch_without_macros() {
    let (logger, entries) = CaptureLogger::new();
    log::set_logger(logger);
    log::set_min_severity(LogSeverity::Trace);

    log::dispatch(LogSeverity::Debug, "test::direct", "direct message".to_string());
    log::dispatch_detailed(
        LogSeverity::Error,
        "test::direct",
        "detailed message".to_string(),
        "some_file.rs",
        7,
    );

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].message, "direct message");
    assert_eq!(captured[1].file, Some("some_file.rs"));
    assert_eq!(captured[1].line, Some(7));

    drop(captured);
    log::reset_logger();
    log::set_min_severity(LogSeverity::Info);
}
