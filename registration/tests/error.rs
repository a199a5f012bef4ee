//! Tests for app error conversions.

use std::error::Error;

use registration::AppError;
use simplelog::{Config, LevelFilter, WriteLogger};

#[test]
fn test_logger_failure_keeps_its_source() {
    let _ = WriteLogger::init(LevelFilter::Info, Config::default(), std::io::sink());
    let err = WriteLogger::init(LevelFilter::Info, Config::default(), std::io::sink())
        .map_err(AppError::from)
        .unwrap_err();

    assert!(matches!(err, AppError::Logging(_)));
    assert!(err.source().is_some());
    assert!(err.to_string().starts_with("Logging error: "));
}
