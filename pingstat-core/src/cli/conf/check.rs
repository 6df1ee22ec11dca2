use crate::conf::{ConfigError, Settings, load_settings, validate_settings};
use std::path::PathBuf;

pub fn check(path: PathBuf, plain: bool, json: bool) -> anyhow::Result<()> {
    let settings = match load_settings(&path) {
        Ok(settings) => settings,
        Err(err) => {
            print_config_error(&err);
            std::process::exit(1);
        }
    };

    let report = validate_settings(&settings, &path);

    if json {
        println!("{}", report.render_json()?);
    } else if report.has_violations() {
        if plain {
            eprint!("{}", report.render_plain());
        } else {
            eprint!("{}", report.render_pretty());
        }
    }

    if report.has_errors() {
        std::process::exit(1);
    }

    if !json {
        print_summary(&settings);
    }

    Ok(())
}

fn print_summary(settings: &Settings) {
    println!("✔ Settings loaded successfully");
    println!("✔ {} percentile ranks", settings.percentiles.len());
    match settings.timeout {
        Some(timeout) => println!("✔ timeout threshold {timeout} packets"),
        None => println!("✔ no timeout threshold"),
    }
    println!("✔ {} window sizes", settings.windows.len());
    println!("✔ output {}", settings.output_path().display());
}

fn print_config_error(err: &ConfigError) {
    eprintln!("{}", err);
    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ReadFile { .. } => Some(
            "Create a settings file with defaults:\n\
             \n\
             pingstat config init",
        ),

        ConfigError::Parse { .. } => Some(
            "Settings are flat HCL attributes. Every key is optional.\n\
             \n\
             Example:\n\
             \n\
             percentiles = [50, 90, 99]\n\
             timeout     = 5\n\
             windows     = [10, 60]\n\
             output      = \"output.csv\"",
        ),

        ConfigError::AlreadyExists { .. } => Some(
            "Remove the existing file or pass another path to `pingstat config init`.",
        ),

        _ => None,
    }
}
