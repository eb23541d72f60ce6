#![allow(dead_code)]

use smooth_progress::{ProgressBar, ProgressBarBuilder, Status};

// Common test constants
pub const TEST_LIMIT: u64 = 4;
pub const EMPTY_SLOTS: &str = "--------------------------------------------------";

/// Installs a tracing subscriber honouring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Creates a closed bar drawing into an in-memory buffer
pub fn create_test_bar(limit: u64, show_percent: bool) -> ProgressBar<Vec<u8>> {
    init_tracing();
    ProgressBarBuilder::new()
        .limit(limit)
        .show_percent(show_percent)
        .build_with_target(Vec::new())
        .expect("Failed to create test progress bar")
}

/// Creates an open bar drawing into an in-memory buffer
pub fn create_open_bar(limit: u64, show_percent: bool) -> ProgressBar<Vec<u8>> {
    let mut bar = create_test_bar(limit, show_percent);
    assert!(bar.open().expect("Failed to open test progress bar"));
    bar
}

/// Increments the bar `times` times, panicking on failure
pub fn increment_times(bar: &mut ProgressBar<Vec<u8>>, times: u64) {
    for _ in 0..times {
        bar.increment().expect("Failed to increment test progress bar");
    }
}

/// Returns everything the bar has drawn so far
pub fn output_of(bar: &ProgressBar<Vec<u8>>) -> String {
    String::from_utf8(bar.target().clone()).expect("Progress bar output is not UTF-8")
}

/// Discards everything the bar has drawn so far
pub fn clear_output(bar: &mut ProgressBar<Vec<u8>>) {
    bar.target_mut().clear();
}

/// Builds the expected display line for the given progress
pub fn expected_line(completed: usize, count: u64, limit: u64, percent: Option<u64>) -> String {
    let mut line = format!(
        "[{}{}]  {}/{}",
        "#".repeat(completed),
        "-".repeat(50 - completed),
        count,
        limit
    );
    if let Some(percent) = percent {
        line.push_str(&format!(" [{}%]", percent));
    }
    line
}

/// Asserts that the bar is open at the given count
pub fn assert_open_at(bar: &ProgressBar<Vec<u8>>, count: u64) {
    assert_eq!(bar.status(), Status::Open);
    assert!(bar.is_open());
    assert_eq!(bar.count(), Some(count));
}

/// Asserts that the bar is closed at the given count
pub fn assert_closed_at(bar: &ProgressBar<Vec<u8>>, count: u64) {
    assert_eq!(bar.status(), Status::Closed);
    assert!(!bar.is_open());
    assert_eq!(bar.count(), Some(count));
}
