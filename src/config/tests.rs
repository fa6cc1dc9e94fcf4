use std::io::Write;

use clap::Parser;
use tempfile::NamedTempFile;

use super::*;

fn raw_with_url(url: &str) -> RawSettings {
    let mut raw = RawSettings::default();
    raw.api.base_url = Some(url.to_string());
    raw
}

fn cli(args: &[&str]) -> CliArgs {
    CliArgs::try_parse_from(args).expect("valid arguments")
}

#[test]
fn defaults_apply_when_only_url_is_set() {
    let settings = Settings::from_raw(raw_with_url("https://api.example.com")).expect("valid");

    assert_eq!(settings.api.base_url.as_str(), "https://api.example.com/");
    assert_eq!(
        settings.api.timeout,
        Duration::from_secs(DEFAULT_API_TIMEOUT_SECS)
    );
    assert_eq!(settings.logging.level, LevelFilter::INFO);
    assert!(matches!(settings.logging.format, LogFormat::Compact));
    assert_eq!(settings.form.redirect_delay, DEFAULT_REDIRECT_DELAY);
}

#[test]
fn missing_api_url_is_rejected() {
    let err = Settings::from_raw(RawSettings::default()).expect_err("url required");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "api.base_url",
            ..
        }
    ));

    let err = Settings::from_raw(raw_with_url("   ")).expect_err("blank url");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "api.base_url",
            ..
        }
    ));
}

#[test]
fn non_http_api_url_is_rejected() {
    let err = Settings::from_raw(raw_with_url("ftp://files.example.com")).expect_err("scheme");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "api.base_url",
            ..
        }
    ));
}

#[test]
fn zero_timeout_is_rejected() {
    let mut raw = raw_with_url("https://api.example.com");
    raw.api.timeout_seconds = Some(0);
    let err = Settings::from_raw(raw).expect_err("zero timeout");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "api.timeout_seconds",
            ..
        }
    ));
}

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = raw_with_url("https://file.example.com");
    raw.logging.level = Some("info".to_string());

    let args = cli(&[
        "vidz-share",
        "--api-url",
        "https://cli.example.com",
        "--log-level",
        "debug",
        "--log-json",
        "true",
        "--redirect-delay-ms",
        "250",
        "tags",
    ]);
    raw.apply_cli_overrides(&args);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.api.base_url.host_str(), Some("cli.example.com"));
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
    assert!(matches!(settings.logging.format, LogFormat::Json));
    assert_eq!(settings.form.redirect_delay, Duration::from_millis(250));
}

#[test]
fn invalid_log_level_is_rejected() {
    let mut raw = raw_with_url("https://api.example.com");
    raw.logging.level = Some("loud".to_string());
    let err = Settings::from_raw(raw).expect_err("bad level");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "logging.level",
            ..
        }
    ));
}

#[test]
fn config_file_is_layered_under_cli() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("tmp file");
    writeln!(
        file,
        "[api]\nbase_url = \"https://file.example.com\"\ntimeout_seconds = 3\n\n[form]\nredirect_delay_ms = 10"
    )
    .expect("write config");

    let path = file.path().to_str().expect("utf-8 path");
    let args = cli(&["vidz-share", "--config-file", path, "--redirect-delay-ms", "20", "tags"]);
    let settings = load(&args).expect("loaded");

    assert_eq!(settings.api.timeout, Duration::from_secs(3));
    assert_eq!(settings.form.redirect_delay, Duration::from_millis(20));
}

#[test]
fn share_tags_are_repeatable() {
    let args = cli(&[
        "vidz-share",
        "share",
        "--title",
        "Intro to Sets",
        "--tag",
        "2",
        "--tag",
        "5",
    ]);
    match args.command {
        Command::Share(share) => {
            assert_eq!(share.title.as_deref(), Some("Intro to Sets"));
            assert_eq!(share.tags, vec![2, 5]);
            assert_eq!(share.video_url, None);
        }
        Command::Tags => panic!("expected share command"),
    }
}

#[test]
fn missing_explicit_config_file_fails() {
    let file = NamedTempFile::new().expect("tmp file");
    let missing = file.path().with_extension("absent.toml");
    let path = missing.to_str().expect("utf-8 path");
    let args = cli(&["vidz-share", "--config-file", path, "tags"]);
    assert!(matches!(load(&args), Err(LoadError::Build(_))));
}
