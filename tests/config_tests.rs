//! Tests for configuration loading and validation.

use std::io::Write;

use scorebridge::config::Config;
use scorebridge::domain::EventCode;
use scorebridge::error::{ConfigError, Error};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn full_config_loads() {
    let file = write_config(
        r#"
[scoring]
host = "localhost"
port = 18080
events = ["test3", "quals"]

[broker]
url = "mqtt://localhost:1883"
client_id = "bridge-1"
monitor_topic = "test"

[logging]
level = "debug"
format = "json"
"#,
    );

    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.scoring.host, "localhost");
    assert_eq!(config.scoring.events.len(), 2);
    assert_eq!(config.broker.client_id, "bridge-1");
    assert_eq!(config.broker.monitor_topic.as_deref(), Some("test"));
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn defaults_apply_to_optional_fields() {
    let file = write_config(
        r#"
[scoring]
host = "10.0.0.2"
events = ["test3"]

[broker]
url = "mqtt://localhost:1883"
"#,
    );

    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.scoring.port, 18080);
    assert_eq!(config.broker.client_id, "scorebridge");
    assert_eq!(config.broker.monitor_topic, None);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, "pretty");
}

#[test]
fn url_helpers_derive_endpoints() {
    let file = write_config(
        r#"
[scoring]
host = "localhost"
events = ["test3"]

[broker]
url = "mqtt://localhost:1883"
"#,
    );

    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.scoring.api_base(), "http://localhost:18080");
    assert_eq!(
        config.scoring.stream_url(&EventCode::from("test3")),
        "ws://localhost:18080/api/v2/stream/?code=test3"
    );
}

#[test]
fn empty_host_is_rejected() {
    let file = write_config(
        r#"
[scoring]
host = ""
events = ["test3"]

[broker]
url = "mqtt://localhost:1883"
"#,
    );

    let result = Config::load(file.path());

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::MissingField { field: "host" }))
    ));
}

#[test]
fn missing_events_are_rejected() {
    let file = write_config(
        r#"
[scoring]
host = "localhost"
events = []

[broker]
url = "mqtt://localhost:1883"
"#,
    );

    let result = Config::load(file.path());

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::MissingField { field: "events" }))
    ));
}

#[test]
fn blank_event_code_is_rejected() {
    let file = write_config(
        r#"
[scoring]
host = "localhost"
events = ["test3", ""]

[broker]
url = "mqtt://localhost:1883"
"#,
    );

    let result = Config::load(file.path());

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "events",
            ..
        }))
    ));
}

#[test]
fn empty_broker_url_is_rejected() {
    let file = write_config(
        r#"
[scoring]
host = "localhost"
events = ["test3"]

[broker]
url = ""
"#,
    );

    let result = Config::load(file.path());

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::MissingField { field: "url" }))
    ));
}

#[test]
fn unreadable_file_is_a_read_error() {
    let result = Config::load("/nonexistent/scorebridge.toml");

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let file = write_config("not = [valid");

    let result = Config::load(file.path());

    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}
