mod constraints;
mod error;
mod loader;
mod report;
mod settings;
mod validate;


pub use error::ConfigError;
pub use loader::{load_settings, parse_settings, resolve_settings};
pub use report::{Severity, ValidationIssue, ValidationReport};
pub use settings::{DEFAULT_OUTPUT_FILE, DEFAULT_SETTINGS_FILE, Settings, SettingsOverride};
pub use validate::validate_settings;
