/**
 * Server Configuration
 *
 * Loads `ServerConfig` at process start.
 *
 * # Configuration Sources
 *
 * 1. Built-in defaults suitable for local development
 * 2. An optional TOML file named by `WELLNESS_CONFIG`
 * 3. Environment variables, which override the file
 *
 * | Variable        | Key            | Default                          |
 * |-----------------|----------------|----------------------------------|
 * | `DATABASE_URL`  | `database_url` | `sqlite://wellness.db?mode=rwc`  |
 * | `JWT_SECRET`    | `jwt_secret`   | unset (fallback secret, warned)  |
 * | `SEED_KEY`      | `seed_key`     | unset (`/seed` always refuses)   |
 * | `SERVER_HOST`   | `host`         | `0.0.0.0`                        |
 * | `SERVER_PORT`   | `port`         | `5000`                           |
 * | `AUTH_POLICY`   | `auth_policy`  | `permissive`                     |
 *
 * Empty environment values count as unset.
 *
 * # Error Handling
 *
 * Unlike optional services, a bad configuration value stops startup with a
 * `ConfigError`.
 */

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::backend::auth::sessions::FALLBACK_JWT_SECRET;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://wellness.db?mode=rwc";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

/// Environment variable naming the optional TOML config file
pub const CONFIG_FILE_ENV: &str = "WELLNESS_CONFIG";

/// Who may call the mutating catalog endpoints and join
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthPolicy {
    /// Anonymous callers may create/update/delete and join
    #[default]
    Permissive,
    /// Mutations need an admin token, join needs any valid token
    Enforced,
}

impl FromStr for AuthPolicy {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "enforced" => Ok(Self::Enforced),
            _ => Err(ConfigError::InvalidValue {
                key: "AUTH_POLICY",
                value: value.to_string(),
            }),
        }
    }
}

/// Configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Runtime configuration for the server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub database_url: String,
    /// Token signing secret; the fallback secret is used when unset
    pub jwt_secret: Option<String>,
    /// Key required by `/seed`; seeding is refused when unset
    pub seed_key: Option<String>,
    pub host: String,
    pub port: u16,
    pub auth_policy: AuthPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            jwt_secret: None,
            seed_key: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            auth_policy: AuthPolicy::default(),
        }
    }
}

impl ServerConfig {
    /// Load from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    ///
    /// # Arguments
    /// * `lookup` - Returns the value of a variable, or `None` if unset
    ///
    /// # Errors
    /// `ConfigError` if the config file cannot be read or parsed, or if a
    /// variable holds an invalid value
    pub fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match non_empty(lookup(CONFIG_FILE_ENV)) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(lookup)?;
        Ok(config)
    }

    /// Parse a TOML config file; missing keys take their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply environment-style overrides on top of the current values
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| non_empty(lookup(key));

        if let Some(url) = get("DATABASE_URL") {
            self.database_url = url;
        }
        if let Some(secret) = get("JWT_SECRET") {
            self.jwt_secret = Some(secret);
        }
        if let Some(key) = get("SEED_KEY") {
            self.seed_key = Some(key);
        }
        if let Some(host) = get("SERVER_HOST") {
            self.host = host;
        }
        if let Some(port) = get("SERVER_PORT") {
            self.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_PORT",
                value: port.clone(),
            })?;
        }
        if let Some(policy) = get("AUTH_POLICY") {
            self.auth_policy = policy.parse()?;
        }

        Ok(())
    }

    /// Secret used for token signing
    pub fn jwt_secret(&self) -> &str {
        self.jwt_secret
            .as_deref()
            .filter(|secret| !secret.is_empty())
            .unwrap_or(FALLBACK_JWT_SECRET)
    }

    pub fn uses_fallback_secret(&self) -> bool {
        self.jwt_secret() == FALLBACK_JWT_SECRET
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
