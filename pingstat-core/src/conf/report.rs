use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub message: String,
    pub help: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub file: PathBuf,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

#[derive(Serialize)]
struct ValidationReportJson<'a> {
    file: &'a Path,
    errors: &'a [ValidationIssue],
    warnings: &'a [ValidationIssue],
}

impl ValidationReport {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            ..Default::default()
        }
    }

    pub fn has_violations(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub(crate) fn error(&mut self, message: String, help: Option<String>) {
        self.errors.push(ValidationIssue {
            severity: Severity::Error,
            message,
            help,
        });
    }

    pub(crate) fn warning(&mut self, message: String, help: Option<String>) {
        self.warnings.push(ValidationIssue {
            severity: Severity::Warning,
            message,
            help,
        });
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        let json = ValidationReportJson {
            file: &self.file,
            errors: &self.errors,
            warnings: &self.warnings,
        };

        serde_json::to_string_pretty(&json)
    }

    pub fn render_plain(&self) -> String {
        let mut out = String::new();

        for issue in self.errors.iter().chain(self.warnings.iter()) {
            let severity = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };

            out.push_str(&format!(
                "{}:{}: {}\n",
                self.file.display(),
                severity,
                issue.message
            ));

            if let Some(help) = &issue.help {
                out.push_str(&format!("  help: {}\n", help));
            }
        }

        out
    }

    pub fn render_pretty(&self) -> String {
        let mut out = String::new();

        if self.has_violations() {
            out.push_str(&format!(
                "settings validation failed ({} errors, {} warnings)\n\n",
                self.errors.len(),
                self.warnings.len()
            ));
        }

        out.push_str(&format!("{}\n", self.file.display()));

        for issue in self.errors.iter().chain(self.warnings.iter()) {
            match issue.severity {
                Severity::Error => {
                    out.push_str(&format!("  {}: {}\n", "error".red().bold(), issue.message));
                }
                Severity::Warning => {
                    out.push_str(&format!(
                        "  {}: {}\n",
                        "warning".yellow().bold(),
                        issue.message
                    ));
                }
            }

            if let Some(help) = &issue.help {
                out.push_str(&format!("  {}: {}\n", "help".cyan(), help));
            }
        }

        out
    }
}

/// Settings Validation
impl ValidationReport {
    pub fn duplicate_percentile(&mut self, rank: i64) {
        self.warning(
            format!("duplicate percentile rank: {}", rank),
            Some("Repeated ranks are computed once.".to_string()),
        )
    }

    pub fn duplicate_window(&mut self, size: u64) {
        self.warning(
            format!("duplicate window size: {}", size),
            Some("Repeated window sizes are computed once.".to_string()),
        )
    }

    pub fn output_parent_dir_does_not_exist(&mut self, output: &Path) {
        self.error(
            format!(
                "output file parent directory does not exist: {}",
                output.display()
            ),
            None,
        )
    }
}
