use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, path::PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub contact: ContactConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    /// External endpoint receiving the contact form as JSON
    pub endpoint: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Portfolio content layered on top of the embedded one
    #[serde(default)]
    pub content_path: Option<PathBuf>,
    #[serde(default = "default_resume_path")]
    pub resume_path: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_path: None,
            resume_path: default_resume_path(),
        }
    }
}

fn default_resume_path() -> PathBuf {
    PathBuf::from("public/resume.pdf")
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (FOLIO__CONTACT__ENDPOINT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("contact.endpoint", "http://127.0.0.1:8080/api/contact")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FOLIO")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        match url::Url::parse(&self.contact.endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(format!(
                    "Contact endpoint must use http or https, got {}",
                    url.scheme()
                ));
            }
            Err(e) => return Err(format!("Invalid contact endpoint: {e}")),
        }
        if !matches!(self.observability.log_format.as_str(), "pretty" | "json") {
            return Err(format!(
                "Unknown log format {} (expected pretty or json)",
                self.observability.log_format
            ));
        }
        Ok(())
    }
}
