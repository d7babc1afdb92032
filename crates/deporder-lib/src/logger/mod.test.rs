use super::*;

#[test]
fn test_default_filter_targets_both_crates() {
    assert_eq!(
        default_filter(LogLevel::Debug),
        "deporder=debug,deporder_lib=debug,warn"
    );
    assert_eq!(
        default_filter(LogLevel::Error),
        "deporder=error,deporder_lib=error,warn"
    );
}

#[test]
fn test_logger_not_initialized_initially() {
    // Other tests may initialize the logger; either state must be consistent
    assert_eq!(Logger::is_initialized(), Logger::global().is_some());
}

#[test]
fn test_log_macros_work_without_logger() {
    // Falls back to plain tracing macros when no global logger exists
    crate::log_info!("ordering");
    crate::log_warn!("skipped", LogContext::new("analyze"));
}
