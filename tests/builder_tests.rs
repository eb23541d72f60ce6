//! Tests for bar construction, configuration and the builder.

use smooth_progress::{Error, ProgressBar, ProgressBarBuilder, ProgressBarConfig, Status};

mod common;
use common::helpers::*;

#[test]
fn test_config_default() {
    let config = ProgressBarConfig::default();
    assert_eq!(config.limit, 100);
    assert!(config.show_percent);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_rejects_zero_limit() {
    let config = ProgressBarConfig::new(0, true);
    assert!(matches!(config.validate(), Err(Error::InvalidLimit(0))));
}

#[test]
fn test_new_rejects_zero_limit() {
    let err = ProgressBar::new(0, true).unwrap_err();
    assert!(matches!(err, Error::InvalidLimit(0)));
    assert_eq!(err.to_string(), "Invalid limit: 0, must be positive");
}

#[test]
fn test_with_target_rejects_zero_limit() {
    assert!(ProgressBar::with_target(0, false, Vec::new()).is_err());
}

#[test]
fn test_default_bar() {
    let bar = ProgressBar::default();
    assert_eq!(bar.limit(), 100);
    assert!(bar.show_percent());
    assert_eq!(bar.status(), Status::Closed);
}

#[test]
fn test_from_config() {
    let config = ProgressBarConfig {
        limit: 7,
        ..ProgressBarConfig::default()
    };
    let bar = ProgressBar::from_config(config, Vec::new()).unwrap();
    assert_eq!(bar.limit(), 7);
    assert!(bar.show_percent());
}

#[test]
fn test_builder_defaults() {
    let builder = ProgressBarBuilder::new();
    assert_eq!(*builder.config(), ProgressBarConfig::default());
}

#[test]
fn test_builder_options() {
    let bar = ProgressBarBuilder::new()
        .limit(12)
        .show_percent(false)
        .build_with_target(Vec::new())
        .unwrap();
    assert_eq!(bar.limit(), 12);
    assert!(!bar.show_percent());
}

#[test]
fn test_builder_rejects_zero_limit() {
    let result = ProgressBarBuilder::new().limit(0).build_hidden();
    assert!(matches!(result, Err(Error::InvalidLimit(0))));
}

#[test]
fn test_builder_hidden_tracks_progress() {
    init_tracing();
    let mut bar = ProgressBarBuilder::new().limit(3).build_hidden().unwrap();
    assert!(bar.open().unwrap());
    for _ in 0..3 {
        bar.increment().unwrap();
    }
    assert_eq!(bar.count(), Some(3));
    assert!(!bar.is_open());
}

#[test]
fn test_debug_output_omits_target() {
    let bar = create_open_bar(TEST_LIMIT, false);
    let debug = format!("{:?}", bar);
    assert!(debug.starts_with("ProgressBar"));
    assert!(debug.contains("status: Open"));
    assert!(!debug.contains("target"));
}
