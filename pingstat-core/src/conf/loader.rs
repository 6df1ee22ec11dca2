use crate::conf::error::ConfigError;
use crate::conf::settings::{DEFAULT_SETTINGS_FILE, Settings};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

    parse_settings(&raw).map_err(|e| ConfigError::parse(path, e))
}

pub fn parse_settings(raw: &str) -> Result<Settings, hcl::Error> {
    hcl::from_str(raw)
}

/// Loads `explicit` when given. Otherwise falls back to `pingstat.hcl` in the
/// working directory, then to built-in defaults.
pub fn resolve_settings(explicit: Option<&Path>) -> Result<Settings, ConfigError> {
    if let Some(path) = explicit {
        info!(path = %path.display(), "loading settings");
        return load_settings(path);
    }

    let fallback = Path::new(DEFAULT_SETTINGS_FILE);
    if fallback.is_file() {
        info!(path = %fallback.display(), "loading settings from working directory");
        return load_settings(fallback);
    }

    debug!("no settings file, using defaults");
    Ok(Settings::default())
}
