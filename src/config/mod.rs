pub mod init;
mod schema;

pub use schema::{Config, ThemeSetting, DEFAULT_REFRESH_INTERVAL};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const MIN_REFRESH_INTERVAL: Duration = Duration::from_millis(100);
const MAX_REFRESH_INTERVAL: Duration = Duration::from_secs(3600);

/// Get the config directory path (~/.config/resume-ats/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("resume-ats"))
}

/// Get the default config file path (~/.config/resume-ats/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/resume-ats/config.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
///
/// A missing default config file is not an error: every setting has a default.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!("Failed to parse config: invalid YAML in {}", config_path.display())
    })?;

    tracing::debug!(path = %config_path.display(), "loaded config");
    Ok(config)
}

/// Expand a leading `~/` to the home directory
pub fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

/// Pick the document path: command line first, then config, then the
/// default location.
pub fn resolve_document_path(explicit: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    match explicit.or_else(|| config.document.clone()) {
        Some(path) => Ok(expand_home(&path)),
        None => crate::resume::get_document_path(),
    }
}

/// Validate a loaded config. Returns all validation errors at once.
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Err(scoring_errors) = crate::scoring::validate_scoring(&config.effective_scoring()) {
        errors.extend(scoring_errors);
    }

    if let Some(ref interval) = config.refresh_interval {
        match humantime::parse_duration(interval) {
            Ok(d) if d < MIN_REFRESH_INTERVAL || d > MAX_REFRESH_INTERVAL => errors.push(format!(
                "refresh_interval: '{}' must be between 100ms and 1h",
                interval
            )),
            Ok(_) => {}
            Err(e) => errors.push(format!("refresh_interval: invalid '{}' - {}", interval, e)),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
