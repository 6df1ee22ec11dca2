use crate::analysis::AnalysisRequest;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_SETTINGS_FILE: &str = "pingstat.hcl";
pub const DEFAULT_OUTPUT_FILE: &str = "output.csv";

/// Analysis defaults read from `pingstat.hcl`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Percentile ranks (0-100) reported for every source.
    pub percentiles: Vec<i64>,

    /// Gap, in sequence numbers, above which two replies form a timeout span.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    /// Window sizes, in sequence numbers, for lost-packet incidence.
    pub windows: Vec<u64>,

    /// Path of the CSV artifact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl Settings {
    pub fn analysis_request(&self) -> AnalysisRequest {
        AnalysisRequest {
            percentiles: self.percentiles.clone(),
            timeout: self.timeout,
            windows: self.windows.clone(),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE))
    }
}

/// Values given on the command line. Set fields replace the file's values.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverride {
    pub percentiles: Option<Vec<i64>>,
    pub timeout: Option<u64>,
    pub windows: Option<Vec<u64>>,
    pub output: Option<PathBuf>,
}

impl SettingsOverride {
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(v) = &self.percentiles {
            settings.percentiles = v.clone();
        }
        if let Some(v) = self.timeout {
            settings.timeout = Some(v);
        }
        if let Some(v) = &self.windows {
            settings.windows = v.clone();
        }
        if let Some(v) = &self.output {
            settings.output = Some(v.clone());
        }
    }
}
