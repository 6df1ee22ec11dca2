use crate::analysis::{AnalysisRequest, SourceAnalysis, analyze};
use crate::cli::analyze::AnalyzeArgs;
use crate::cli::analyze::csv::render_csv;
use crate::cli::analyze::json::render_json;
use crate::cli::analyze::render::render_reports;
use crate::cli::analyze::types::{AnalyzeOutcome, SourceError, SourceReport};
use crate::conf::resolve_settings;
use crate::ingest::load_sequence_map;
use crate::logging::{OutputFormat, default_output_format};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use tracing::{info, warn};

pub fn run_analyze(args: AnalyzeArgs) -> Result<AnalyzeOutcome> {
    let mut settings =
        resolve_settings(args.config.as_deref()).context("failed to load settings")?;
    args.overrides().apply_to(&mut settings);

    let request = settings.analysis_request();
    let reports = analyze_sources(&args.files, &request);

    match args.format.unwrap_or_else(default_output_format) {
        OutputFormat::Json => {
            let json = render_json(&reports).context("failed to serialize reports")?;
            println!("{json}");
        }
        OutputFormat::Pretty => print!("{}", render_reports(&reports, true)),
        OutputFormat::Plain => print!("{}", render_reports(&reports, false)),
    }

    if !args.no_csv {
        let output = settings.output_path();
        fs::write(&output, render_csv(&request, &reports))
            .with_context(|| format!("failed to write {}", output.display()))?;
        info!(path = %output.display(), "csv written");
    }

    let failed = reports.iter().filter(|r| !r.is_ok()).count();

    Ok(AnalyzeOutcome {
        analyzed: reports.len() - failed,
        failed,
    })
}

/// Analyzes every source on its own scoped thread.
///
/// Reports come back in the order of `sources`.
pub fn analyze_sources(sources: &[PathBuf], request: &AnalysisRequest) -> Vec<SourceReport> {
    thread::scope(|scope| {
        let handles: Vec<_> = sources
            .iter()
            .map(|source| scope.spawn(move || analyze_source(source, request)))
            .collect();

        handles
            .into_iter()
            .zip(sources)
            .map(|(handle, source)| {
                let result = handle
                    .join()
                    .unwrap_or(Err(SourceError::WorkerPanicked));

                if let Err(err) = &result {
                    warn!(source = %source.display(), error = %err, "source failed");
                }

                SourceReport {
                    source: source.clone(),
                    result,
                }
            })
            .collect()
    })
}

pub fn analyze_source(
    source: &Path,
    request: &AnalysisRequest,
) -> Result<SourceAnalysis, SourceError> {
    info!(source = %source.display(), "analyzing");

    let ingested = load_sequence_map(source)?;
    let analysis = analyze(&ingested.map, request)?;

    info!(
        source = %source.display(),
        transmitted = analysis.summary.transmitted,
        lost = analysis.summary.lost,
        "analysis complete"
    );

    Ok(analysis)
}
