mod csv;
mod json;
mod render;
mod run;
mod types;

#[cfg(test)]
mod tests;

pub use csv::*;
pub use json::*;
pub use render::*;
pub use run::*;
pub use types::*;

use crate::conf::SettingsOverride;
use crate::logging::OutputFormat;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Ping logs to analyze (several paths or a comma-separated list)
    #[arg(required = true, value_delimiter = ',')]
    pub files: Vec<PathBuf>,

    /// Percentile ranks to report, e.g. `50,90,99`
    #[arg(
        short = 'p',
        long = "percentiles",
        value_delimiter = ',',
        allow_negative_numbers = true
    )]
    pub percentiles: Option<Vec<i64>>,

    /// Report gaps wider than this many sequence numbers
    #[arg(short = 't', long)]
    pub timeout: Option<u64>,

    /// Window sizes for lost-packet counts, e.g. `10,60`
    #[arg(short = 'c', long = "windows", value_delimiter = ',')]
    pub windows: Option<Vec<u64>>,

    /// CSV output path (default: output.csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Console output format (default: pretty on a terminal, plain otherwise)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Settings file (default: ./pingstat.hcl when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip writing the CSV file
    #[arg(long)]
    pub no_csv: bool,
}

impl AnalyzeArgs {
    pub fn overrides(&self) -> SettingsOverride {
        SettingsOverride {
            percentiles: self.percentiles.clone(),
            timeout: self.timeout,
            windows: self.windows.clone(),
            output: self.output.clone(),
        }
    }
}
