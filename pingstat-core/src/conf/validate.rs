use crate::conf::constraints::{PERCENTILE_RANK, TIMEOUT_THRESHOLD, WINDOW_SIZE, validate_range};
use crate::conf::report::ValidationReport;
use crate::conf::settings::Settings;
use std::collections::HashSet;
use std::path::Path;

/// Checks what can be checked without a ping log.
///
/// Thresholds and window sizes also depend on the sequence span of each
/// source; those limits are enforced per source at analysis time.
pub fn validate_settings(settings: &Settings, file: &Path) -> ValidationReport {
    let mut report = ValidationReport::new(file);

    let mut seen_ranks = HashSet::new();
    for &rank in &settings.percentiles {
        validate_range(rank, &PERCENTILE_RANK, &mut report);
        if !seen_ranks.insert(rank) {
            report.duplicate_percentile(rank);
        }
    }

    if let Some(timeout) = settings.timeout {
        validate_range(timeout, &TIMEOUT_THRESHOLD, &mut report);
    }

    let mut seen_sizes = HashSet::new();
    for &size in &settings.windows {
        validate_range(size, &WINDOW_SIZE, &mut report);
        if !seen_sizes.insert(size) {
            report.duplicate_window(size);
        }
    }

    if let Some(output) = &settings.output {
        validate_output(output, &mut report);
    }

    report
}

fn validate_output(output: &Path, report: &mut ValidationReport) {
    let Some(parent) = output.parent() else {
        return;
    };

    // A bare file name has an empty parent: the working directory.
    if !parent.as_os_str().is_empty() && !parent.is_dir() {
        report.output_parent_dir_does_not_exist(output);
    }
}
