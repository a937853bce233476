use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub backend: BackendConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Where the contact form sends submissions (`<base_url>/api/contact`).
#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    /// Unset means this server's own API, see [`Config::backend_base_url`].
    #[serde(default)]
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            email: String::new(),
        }
    }
}

fn default_site_name() -> String {
    "Portfolio".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (`BACKEND_URL`, `REACT_APP_BACKEND_URL`, `DATABASE_URL`)
    /// 2. Environment variables (PORTFOLIO__BACKEND__BASE_URL, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8001)?
            .set_default("database.url", "sqlite:portfolio.db")?
            .set_default("database.max_connections", 5)?
            .set_default("backend.timeout_secs", 10)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }
        if let Ok(backend_url) = env::var("REACT_APP_BACKEND_URL") {
            builder = builder.set_override("backend.base_url", backend_url)?;
        }
        if let Ok(backend_url) = env::var("BACKEND_URL") {
            builder = builder.set_override("backend.base_url", backend_url)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Apply `serve --host/--port` so everything derived from the server
    /// address follows the listener.
    pub fn override_server(&mut self, host: Option<String>, port: Option<u16>) {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
    }

    /// Explicit `backend.base_url`, otherwise the address this server
    /// listens on. Wildcard hosts are reached through loopback.
    pub fn backend_base_url(&self) -> String {
        if let Some(base_url) = &self.backend.base_url {
            return base_url.to_owned();
        }

        let host = match self.server.host.as_str() {
            "" | "0.0.0.0" => "127.0.0.1".to_owned(),
            "::" | "[::]" => "[::1]".to_owned(),
            host if host.contains(':') && !host.starts_with('[') => format!("[{host}]"),
            host => host.to_owned(),
        };

        format!("http://{host}:{}", self.server.port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.backend.timeout_secs == 0 {
            return Err("Backend timeout_secs must be at least 1".to_string());
        }

        let base_url = url::Url::parse(&self.backend_base_url())
            .map_err(|e| format!("Invalid backend base_url: {e}"))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err("Backend base_url must use http or https".to_string());
        }

        Ok(())
    }
}
