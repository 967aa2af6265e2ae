//! Configuration management

use serde::Deserialize;
use std::path::PathBuf;
use crate::application::errors::ConfigError;

/// Environment variable holding the access token
pub const AUTH_ENV: &str = "SPARK_AUTH";

/// Spark REST API root
pub const DEFAULT_BASE_URL: &str = "https://api.ciscospark.com/v1";

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Client configuration, every section optional in the file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub auth: AuthConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AuthConfig {
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))
    }
}

/// A place the access token may come from when `--auth` is absent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    Env { var: String, value: Option<String> },
    File { path: PathBuf, value: Option<String> },
}

impl TokenSource {
    /// Snapshot of an environment variable
    pub fn env(var: &str) -> Self {
        Self::Env {
            var: var.to_string(),
            value: std::env::var(var).ok(),
        }
    }

    pub fn file(path: impl Into<PathBuf>, config: &Config) -> Self {
        Self::File {
            path: path.into(),
            value: config.auth.token.clone(),
        }
    }

    /// Empty values count as absent
    pub fn value(&self) -> Option<&str> {
        let value = match self {
            TokenSource::Env { value, .. } | TokenSource::File { value, .. } => value,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }

    pub fn describe(&self) -> String {
        match self {
            TokenSource::Env { var, .. } => format!("environment variable {}", var),
            TokenSource::File { path, .. } => format!("config file {}", path.display()),
        }
    }
}

/// Flag first, then the sources in order. Empty when nothing supplies a token.
pub fn resolve_token(flag: Option<&str>, sources: &[TokenSource]) -> String {
    if let Some(token) = flag.filter(|t| !t.is_empty()) {
        tracing::debug!("Using auth token from --auth");
        return token.to_string();
    }

    for source in sources {
        if let Some(token) = source.value() {
            tracing::debug!("Using auth token from {}", source.describe());
            return token.to_string();
        }
    }

    String::new()
}
