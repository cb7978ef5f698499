use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Document served when no `[source]` section is configured.
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/sebastianmiras/ocnos-googlecloud/main/articulo.json";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    #[serde(default = "default_source_url")]
    pub url: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_source_url(),
        }
    }
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Overrides `server.port` with the value of the `PORT` variable.
    pub fn apply_port_override(&mut self, port: Option<&str>) -> Result<()> {
        if let Some(raw) = port {
            self.server.port = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT value: '{}'", raw))?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let url = &self.source.url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            anyhow::bail!("source.url must be an http:// or https:// URL, got '{}'", url);
        }

        if self.server.host.trim().is_empty() {
            anyhow::bail!("server.host must not be empty");
        }

        Ok(())
    }
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse config file")?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content)
}

/// Resolves the effective configuration: the file at `path` when given,
/// built-in defaults otherwise, then the `PORT` environment override.
pub fn resolve_config(path: Option<&Path>) -> Result<Config> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    let port = std::env::var("PORT").ok();
    config.apply_port_override(port.as_deref())?;
    Ok(config)
}
