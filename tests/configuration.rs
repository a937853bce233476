//! Tests for configuration system

use portfolio::Config;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(Some("config/default.toml".to_owned())).expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.database.max_connections, 5);
    assert_eq!(config.backend.timeout_secs, 10);
    assert_eq!(config.logging.format, "pretty");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_missing_file_uses_defaults() {
    let config = Config::load(Some("config/does-not-exist.toml".to_owned()))
        .expect("Failed to load config");

    assert!(!config.server.host.is_empty());
    assert!(config.server.port > 0);
    assert_eq!(
        config.backend_base_url(),
        format!("http://{}:{}", config.server.host, config.server.port)
    );
    assert_eq!(config.site.name, "Portfolio");
}

#[test]
fn test_config_reads_custom_file() {
    let dir = temp_dir::TempDir::new().unwrap();
    let path = dir.child("portfolio.toml");
    std::fs::write(
        &path,
        r#"
[server]
host = "0.0.0.0"
port = 9000

[backend]
base_url = "https://api.example.com"
timeout_secs = 3

[site]
name = "Jane Doe"
"#,
    )
    .unwrap();

    let config = Config::load(Some(path.display().to_string())).expect("Failed to load config");

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.backend.timeout_secs, 3);
    assert_eq!(config.backend_base_url(), "https://api.example.com");
    assert_eq!(config.site.name, "Jane Doe");
    assert_eq!(config.logging.level, "info");
}
