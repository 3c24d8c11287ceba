use std::io::Write;

use crtsh_ui::config::TerminalConfig;

fn write_temp(suffix: &str, body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

#[test]
fn partial_toml_keeps_defaults() {
    let file = write_temp(
        ".toml",
        r#"
user = "Observer"

[ui]
color = false
"#,
    );
    let config = TerminalConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.user, "Observer");
    assert!(!config.ui.color);
    assert!(config.ui.banner);
    assert_eq!(config.history.max_entries, None);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn json_is_accepted() {
    let file = write_temp(
        ".json",
        r#"{"history": {"max_entries": 5}, "logging": {"level": "debug", "json": true}}"#,
    );
    let config = TerminalConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.history.max_entries, Some(5));
    assert!(config.logging.json);
    assert_eq!(config.user, "guest");
}

#[test]
fn unknown_extension_is_rejected() {
    let file = write_temp(".yaml", "user: x");
    let err = TerminalConfig::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Unsupported config format"));
}

#[test]
fn malformed_toml_reports_context() {
    let file = write_temp(".toml", "user = [");
    let err = TerminalConfig::load_from_file(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse TOML config file"));
}

#[test]
fn missing_file_is_an_error_when_explicit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(TerminalConfig::load(Some(path.as_path())).is_err());
}
