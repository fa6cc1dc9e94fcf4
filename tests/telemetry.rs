#![deny(clippy::all, clippy::pedantic)]

use std::error::Error;

use tracing::level_filters::LevelFilter;
use vidz_share::config::{LogFormat, LoggingSettings};
use vidz_share::infra::{error::InfraError, telemetry};

#[test]
fn second_install_is_reported_with_its_cause() {
    let logging = LoggingSettings {
        level: LevelFilter::WARN,
        format: LogFormat::Compact,
    };

    telemetry::init(&logging).expect("first install");
    let err = telemetry::init(&logging).expect_err("subscriber already set");

    assert!(matches!(err, InfraError::Telemetry(_)));
    assert!(err.source().is_some());
}
