use bigfiles::config::Config;
use bigfiles::error::ConfigError;
use std::io::Write;
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn parse_complete_config_file() {
    let file = config_file(
        r#"
[scanner]
top_n = 25
include_hidden = true
extension = ".mkv"

[report]
show_errors = true
"#,
    );

    let config = Config::load(Some(file.path())).unwrap();

    assert_eq!(config.scanner.top_n, 25);
    assert!(config.scanner.include_hidden);
    assert_eq!(config.scanner.extension.as_deref(), Some(".mkv"));
    assert!(config.report.show_errors);
}

#[test]
fn parse_partial_config_uses_defaults() {
    let file = config_file("[report]\nshow_errors = true\n");

    let config = Config::load(Some(file.path())).unwrap();

    // Explicit value
    assert!(config.report.show_errors);
    // Default values
    assert_eq!(config.scanner.top_n, 10);
    assert!(config.scanner.extension.is_none());
}

#[test]
fn parse_invalid_toml_returns_error() {
    let file = config_file("this is not valid toml [[[");

    let result = Config::load(Some(file.path()));
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn parse_out_of_range_top_n_returns_error() {
    let file = config_file("[scanner]\ntop_n = 0\n");

    let result = Config::load(Some(file.path()));
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn missing_explicit_file_returns_error() {
    let result = Config::load(Some(std::path::Path::new("/nonexistent/bigfiles.toml")));
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}
