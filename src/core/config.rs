//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.vibe/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VibeConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const LOCAL_BASE_URL: &str = "http://localhost:8000";
pub const CONTAINER_BASE_URL: &str = "http://backend:8000";
pub const DEFAULT_LOG_FILE: &str = "vibe.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

pub const ENV_API_URL: &str = "VIBE_API_URL";
pub const ENV_HOST: &str = "VIBE_HOST";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Where the base URL came from. Logged at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUrlSource {
    Cli,
    Env,
    ConfigFile,
    Derived,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub base_url_source: BaseUrlSource,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

/// Values supplied on the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub api_url: Option<String>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.vibe/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".vibe").join("config.toml"))
}

/// Load config from `~/.vibe/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `VibeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<VibeConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(VibeConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(VibeConfig::default());
    }

    load_config_from(&path)
}

/// Load and parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<VibeConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: VibeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Vibe Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "http://localhost:8000"   # Or set VIBE_API_URL, or pass --api-url

# [logging]
# level = "debug"                      # "off", "error", "warn", "info", "debug", "trace"
# file = "vibe.log"                    # Or pass --log-file
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config from the process environment.
pub fn resolve(config: &VibeConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with(config, cli, |key| std::env::var(key).ok())
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `env` looks up environment variables; empty values count as unset.
pub fn resolve_with<F>(config: &VibeConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());

    // Base URL: CLI → env → config → derived from host
    let (base_url, base_url_source) = if let Some(url) = cli.api_url.clone() {
        (url, BaseUrlSource::Cli)
    } else if let Some(url) = env(ENV_API_URL) {
        (url, BaseUrlSource::Env)
    } else if let Some(url) = config.api.base_url.clone() {
        (url, BaseUrlSource::ConfigFile)
    } else {
        let host = env(ENV_HOST)
            .or_else(|| env("HOSTNAME"))
            .unwrap_or_else(|| "localhost".to_string());
        (default_base_url(&host).to_string(), BaseUrlSource::Derived)
    };

    // Log level: config → default; unknown names fall back to the default
    let log_level = match config.logging.level.as_deref() {
        Some(name) => name.parse::<LevelFilter>().unwrap_or_else(|_| {
            warn!("Unknown log level '{}', using {}", name, DEFAULT_LOG_LEVEL);
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    // Log file: CLI → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.logging.file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        base_url,
        base_url_source,
        log_level,
        log_file,
    }
}

/// Backend address when nothing is configured: talk to localhost when
/// running on localhost, otherwise to the `backend` service.
pub fn default_base_url(host: &str) -> &'static str {
    if host == "localhost" {
        LOCAL_BASE_URL
    } else {
        CONTAINER_BASE_URL
    }
}
