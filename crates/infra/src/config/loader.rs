//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. Only if a required one is missing, falls back to loading from file;
//!    an invalid value in a variable that is set is reported as an error
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `AUTHZ_PERMISSION_MANAGEMENT_URL`: Permission management base URL (required)
//! - `AUTHZ_ROLE_MANAGEMENT_URL`: Role management base URL (required)
//! - `AUTHZ_USER_MANAGEMENT_URL`: User management base URL (required)
//! - `AUTHZ_HTTP_TIMEOUT_SECS`: Request timeout in seconds
//! - `AUTHZ_HTTP_USER_AGENT`: User agent sent with every call
//! - `AUTHZ_LOG_LEVEL`: Default log filter directive
//! - `AUTHZ_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.{json,toml}` or `./authz-client.{json,toml}`
//! 2. The same names in `..` and `../..`
//! 3. The same names relative to the executable location

use std::path::{Path, PathBuf};

use authz_domain::{Config, EndpointConfig, HttpConfig, LoggingConfig, Result, SystemError};

const FILE_NAMES: [&str; 4] = ["config.json", "config.toml", "authz-client.json", "authz-client.toml"];

const REQUIRED_VARS: [&str; 3] =
    ["AUTHZ_PERMISSION_MANAGEMENT_URL", "AUTHZ_ROLE_MANAGEMENT_URL", "AUTHZ_USER_MANAGEMENT_URL"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `SystemError::Config` if an environment variable holds an invalid
/// value, or if a required one is missing and no usable file is found.
pub fn load() -> Result<Config> {
    if let Some(missing) = REQUIRED_VARS.iter().find(|key| std::env::var_os(key).is_none()) {
        tracing::debug!(missing = %missing, "Required environment variable unset, trying file");
        return load_from_file(None);
    }

    let config = load_from_env()?;
    tracing::info!("Configuration loaded from environment variables");
    Ok(config)
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `SystemError::Config` if a required variable is missing or an
/// optional one has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let endpoints = EndpointConfig {
        permission_management: env_var(REQUIRED_VARS[0])?,
        role_management: env_var(REQUIRED_VARS[1])?,
        user_management: env_var(REQUIRED_VARS[2])?,
    };

    let mut http = HttpConfig::default();
    if let Ok(raw) = std::env::var("AUTHZ_HTTP_TIMEOUT_SECS") {
        http.timeout_seconds = raw
            .parse::<u64>()
            .map_err(|e| SystemError::config(format!("Invalid HTTP timeout: {e}")))?;
    }
    http.user_agent = std::env::var("AUTHZ_HTTP_USER_AGENT").ok();

    let mut logging = LoggingConfig::default();
    if let Ok(level) = std::env::var("AUTHZ_LOG_LEVEL") {
        logging.level = level;
    }
    logging.json = env_bool("AUTHZ_LOG_JSON", false);

    Ok(Config { endpoints, http, logging })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Format is detected by file extension.
///
/// # Errors
/// Returns `SystemError::Config` if no file is found or it cannot be parsed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SystemError::config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            SystemError::config("No config file found in any of the standard locations")
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SystemError::config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| SystemError::config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| SystemError::config(format!("Invalid JSON format: {e}"))),
        _ => Err(SystemError::config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| SystemError::config(format!("Missing required environment variable: {key}")))
}

/// Accepts `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
