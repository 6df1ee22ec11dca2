mod check;
mod dump;
mod init;


pub use check::*;
use clap::Subcommand;
pub use dump::*;
pub use init::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate a settings file and exit
    Check {
        /// Path to the settings file
        #[arg(default_value = "pingstat.hcl")]
        path: PathBuf,

        /// Print issues without colors
        #[arg(short, long, default_value = "false")]
        plain: bool,

        /// Print issues as JSON
        #[arg(long, conflicts_with = "plain")]
        json: bool,
    },

    /// Print the parsed settings
    Dump {
        #[arg(default_value = "pingstat.hcl")]
        path: PathBuf,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },

    /// Write a default settings file
    Init {
        /// Path of the settings file to create
        #[arg(default_value = "pingstat.hcl")]
        path: PathBuf,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path, plain, json } => check(path, plain, json),
        ConfigCmd::Dump { path, json, yaml } => dump(path, json, yaml),
        ConfigCmd::Init { path } => init(path),
    }
}
