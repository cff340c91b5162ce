//! Application settings loading from config.toml and environment variables.
//!
//! Every setting has a default, so the file is optional. Values from the file are
//! overridden by `DATABASE_URL`, `BIND_ADDR` and `CORS_ORIGINS` when those are set.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

/// Database used when neither the file nor the environment names one
pub const DEFAULT_DATABASE_URL: &str = "sqlite://products.sqlite?mode=rwc";

/// Address the API listens on by default (the catalog UI expects port 8081)
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8081";

/// Config file read when `APP_CONFIG` is not set
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Raw contents of config.toml. Every key may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// `SeaORM` connection URL
    pub database_url: Option<String>,
    /// Socket address for the HTTP listener
    pub bind_addr: Option<String>,
    /// Origins allowed to call the API from a browser; empty means any origin
    pub cors_origins: Option<Vec<String>>,
}

/// Fully resolved application settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `SeaORM` connection URL
    pub database_url: String,
    /// Socket address for the HTTP listener
    pub bind_addr: SocketAddr,
    /// Allowed browser origins; empty allows any
    pub cors_origins: Vec<String>,
}

/// Parses config.toml contents.
///
/// # Errors
/// Returns `Error::Config` if the TOML is malformed or has mistyped keys.
pub fn parse_config(contents: &str) -> Result<FileConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config file: {e}"),
    })
}

/// Loads a config file, treating a missing file as empty.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<FileConfig> {
    let path_ref = path.as_ref();
    if !path_ref.exists() {
        tracing::debug!("No config file at {:?}, using defaults", path_ref);
        return Ok(FileConfig::default());
    }

    tracing::debug!("Loading configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;
    parse_config(&contents)
}

/// Merges file settings with environment overrides and applies defaults.
///
/// `env` looks up a variable by name; passing a closure keeps this testable
/// without touching the process environment.
///
/// # Errors
/// Returns `Error::Config` if the bind address is not a valid socket address.
pub fn resolve<F>(file: FileConfig, env: F) -> Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let database_url = env("DATABASE_URL")
        .or(file.database_url)
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

    let bind_addr_raw = env("BIND_ADDR")
        .or(file.bind_addr)
        .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
    let bind_addr = bind_addr_raw.parse().map_err(|e| Error::Config {
        message: format!("Invalid bind address '{bind_addr_raw}': {e}"),
    })?;

    let cors_origins = env("CORS_ORIGINS")
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_owned)
                .collect()
        })
        .or(file.cors_origins)
        .unwrap_or_default();

    Ok(AppConfig {
        database_url,
        bind_addr,
        cors_origins,
    })
}

/// Loads the application configuration from `APP_CONFIG` (or ./config.toml)
/// and the process environment.
///
/// # Errors
/// Returns an error if the config file is unreadable or any setting is invalid.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = std::env::var("APP_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let file = load_config_file(&path)?;
    let config = resolve(file, |key| std::env::var(key).ok())?;
    tracing::info!(
        "Configuration loaded (bind address {}, {} CORS origin(s))",
        config.bind_addr,
        config.cors_origins.len()
    );
    Ok(config)
}
