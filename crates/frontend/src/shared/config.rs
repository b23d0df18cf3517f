use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Полный адрес бэкенда; если не задан, строится из адреса страницы и `port`
    #[serde(default)]
    pub base_url: Option<String>,
    pub port: u16,
    pub prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Ошибка разбора конфигурации: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
port = 8000
prefix = "/api"

[log]
level = "debug"
"#;

impl Config {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load the embedded configuration.
    ///
    /// `ESTATE_API_URL` set at build time overrides the backend address.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_toml(DEFAULT_CONFIG)?;
        if let Some(url) = option_env!("ESTATE_API_URL") {
            config.api.base_url = Some(url.to_string());
        }
        Ok(config)
    }

    pub fn log_level(&self) -> log::Level {
        self.log.level.parse().unwrap_or(log::Level::Debug)
    }
}

impl ApiConfig {
    /// Адрес бэкенда без завершающего слэша, например "http://127.0.0.1:8000"
    pub fn base(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("{}:{}", window_origin(), self.port),
        }
    }

    /// Build a full API URL from a path like "/orders/12"
    pub fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base(), self.prefix, path)
    }
}

/// Протокол и хост текущей страницы
fn window_origin() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return "http://127.0.0.1".to_string(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}", protocol, hostname)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = Config::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.port, 8000);
        assert_eq!(config.api.prefix, "/api");
        assert_eq!(config.api.base_url, None);
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_url_uses_explicit_base() {
        let config = Config::from_toml(
            r#"
            [api]
            base_url = "http://127.0.0.1:8000/"
            port = 8000
            prefix = "/api"

            [log]
            level = "warn"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.url("/orders/12"), "http://127.0.0.1:8000/api/orders/12");
        assert_eq!(config.log_level(), log::Level::Warn);
    }

    #[test]
    fn test_log_section_is_optional() {
        let config = Config::from_toml("[api]\nport = 9000\nprefix = \"\"\n").unwrap();
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(Config::from_toml("[api]\nport = \"x\"").is_err());
    }
}
