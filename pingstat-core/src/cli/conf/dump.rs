use crate::conf::load_settings;
use serde::Serialize;
use std::path::PathBuf;

/// Prints the parsed settings, JSON unless YAML is asked for.
pub fn dump(path: PathBuf, json: bool, yaml: bool) -> anyhow::Result<()> {
    let settings = load_settings(&path)?;

    let out = if yaml && !json {
        to_yaml(&settings)?
    } else {
        to_json(&settings)?
    };
    println!("{out}");

    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn to_yaml<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_yaml::to_string(value)?)
}
