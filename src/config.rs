//! Configuration management for the login form service
//!
//! Values come from built-in defaults, an optional TOML file and
//! `LOGIN_FORM_*` environment variables, in increasing priority.
//! Nested keys use `__`, e.g. `LOGIN_FORM_SERVER__PORT=8080`.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration file, looked up relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Complete configuration for both halves of the application
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub client: ClientConfig,
}

/// HTTP server settings (restart required)
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// IP address to bind the HTTP listener
    pub bind_address: String,

    /// Port for the HTTP listener. Environment: LOGIN_FORM_SERVER__PORT
    pub port: u16,

    /// Directory static assets are served from
    pub static_root: String,

    /// File under `static_root` served for `GET /`
    pub index_file: String,

    /// Largest accepted request body
    pub max_body_bytes: usize,
}

/// Settings for the form controller
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// Full URL of the form endpoint
    pub endpoint: String,
}

impl AppConfig {
    /// Load configuration, reading `path` if it exists.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        let settings = Config::builder()
            .set_default("server.bind_address", "127.0.0.1")?
            .set_default("server.port", 3000_i64)?
            .set_default("server.static_root", ".")?
            .set_default("server.index_file", "main.html")?
            .set_default("server.max_body_bytes", 64_i64 * 1024)?
            .set_default("client.endpoint", "http://127.0.0.1:3000/form-api")?
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix("LOGIN_FORM")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("server.port cannot be 0".into()));
        }

        if self.server.static_root.is_empty() {
            return Err(ConfigError::Message(
                "server.static_root cannot be empty".into(),
            ));
        }

        if self.server.index_file.is_empty() {
            return Err(ConfigError::Message(
                "server.index_file cannot be empty".into(),
            ));
        }

        if self.server.max_body_bytes == 0 {
            return Err(ConfigError::Message(
                "server.max_body_bytes must be greater than 0".into(),
            ));
        }

        match reqwest::Url::parse(&self.client.endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
            Ok(url) => Err(ConfigError::Message(format!(
                "client.endpoint must use http or https, got {}",
                url.scheme()
            ))),
            Err(e) => Err(ConfigError::Message(format!(
                "client.endpoint is not a valid URL: {e}"
            ))),
        }
    }
}

impl ServerConfig {
    /// Bind address and port as a socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    pub fn static_root_path(&self) -> PathBuf {
        PathBuf::from(&self.static_root)
    }
}
