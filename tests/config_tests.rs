use std::fs;
use std::time::Duration;

use homework_notifier::domain::ValidationMode;
use homework_notifier::error::{ConfigError, Error};
use homework_notifier::infrastructure::config::settings::Config;
use tempfile::NamedTempFile;

fn write_temp_config(contents: &str) -> NamedTempFile {
    let file = NamedTempFile::new().expect("create temp config");
    fs::write(file.path(), contents).expect("write temp config");
    file
}

#[test]
fn full_config_round_trips_into_runtime_settings() {
    let file = write_temp_config(
        r#"
[api]
endpoint = "http://127.0.0.1:8080/api/user_api/homework_statuses/"
retry_interval_secs = 30
request_timeout_secs = 5

[validation]
strict_keys = true

[startup]
require_credentials = false

[logging]
level = "debug"
format = "json"
"#,
    );

    let config = Config::load(file.path()).expect("load config");

    assert_eq!(
        config.endpoint_url().expect("endpoint").port(),
        Some(8080)
    );
    assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
    assert!(!config.startup.require_credentials);
    assert_eq!(config.logging.format, "json");

    let poller = config.poller_config();
    assert_eq!(poller.retry_interval, Duration::from_secs(30));
    assert_eq!(poller.validation, ValidationMode::Strict);
}

#[test]
fn config_rejects_zero_timeout() {
    let file = write_temp_config("[api]\nrequest_timeout_secs = 0\n");

    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "request_timeout_secs",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid timeout error, got {err}"),
        Ok(_) => panic!("Expected invalid timeout error, got Ok"),
    }
}

#[test]
fn config_rejects_malformed_toml() {
    let file = write_temp_config("[api\nretry_interval_secs = 10\n");

    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn config_rejects_wrong_types() {
    let file = write_temp_config("[api]\nretry_interval_secs = \"ten\"\n");

    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn missing_file_is_an_error_for_load() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
    assert_eq!(
        Config::load_or_default(&path)
            .expect("defaults")
            .api
            .retry_interval_secs,
        600
    );
}

#[test]
fn log_file_path_is_read_from_config() {
    let dir = tempfile::tempdir().expect("temp dir");
    let log_path = dir.path().join("notifier.log");
    let file = write_temp_config(&format!(
        "[logging]\nlevel = \"info\"\nfile = {:?}\n",
        log_path.display().to_string()
    ));

    let config = Config::load(file.path()).expect("load config");
    assert_eq!(config.logging.file.as_deref(), Some(log_path.as_path()));
}
