use crate::conf::ConfigError;
use anyhow::Result;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const SETTINGS_TEMPLATE: &str = include_str!("../../../config-templates/pingstat.hcl");

pub fn init(path: PathBuf) -> Result<()> {
    write_template(&path)?;

    println!("✔ Wrote default settings to {}", path.display());
    println!();
    println!("Next steps:");
    println!("  pingstat config check {}", path.display());
    println!("  pingstat analyze --config {} <PING_LOG>", path.display());

    Ok(())
}

/// Creates `path` with the default template. An existing file is never
/// overwritten.
pub fn write_template(path: &Path) -> Result<(), ConfigError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            },
            _ => ConfigError::write_file(path, e),
        })?;

    file.write_all(SETTINGS_TEMPLATE.as_bytes())
        .map_err(|e| ConfigError::write_file(path, e))
}
