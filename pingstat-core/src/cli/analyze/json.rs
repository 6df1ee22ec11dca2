use crate::analysis::{
    AnalysisError, LostRange, PercentileOutcome, SourceAnalysis, Summary, TimeoutSpan,
    WindowOutcome, WindowRecord, WindowSummary,
};
use crate::cli::analyze::types::SourceReport;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct SourceReportJson<'a> {
    source: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<AnalysisJson<'a>>,
}

#[derive(Serialize)]
struct AnalysisJson<'a> {
    summary: &'a Summary,
    lost: &'a [LostRange],
    percentiles: Vec<PercentileJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeouts: Option<OutcomeJson<&'a [TimeoutSpan]>>,
    windows: Vec<WindowJson<'a>>,
}

#[derive(Serialize)]
struct PercentileJson {
    rank: i64,
    result: OutcomeJson<f64>,
}

#[derive(Serialize)]
struct WindowJson<'a> {
    window_size: u64,
    result: OutcomeJson<WindowSeriesJson<'a>>,
}

#[derive(Serialize)]
struct WindowSeriesJson<'a> {
    summary: WindowSummary,
    windows: &'a [WindowRecord],
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum OutcomeJson<T> {
    Ok { value: T },
    Rejected { reason: String },
}

impl<T> OutcomeJson<T> {
    fn from_result<'r, U>(
        result: &'r Result<U, AnalysisError>,
        f: impl FnOnce(&'r U) -> T,
    ) -> Self {
        match result {
            Ok(v) => Self::Ok { value: f(v) },
            Err(err) => Self::Rejected {
                reason: err.to_string(),
            },
        }
    }
}

/// One JSON array with a record per source.
pub fn render_json(reports: &[SourceReport]) -> serde_json::Result<String> {
    let json: Vec<SourceReportJson<'_>> = reports
        .iter()
        .map(|report| match &report.result {
            Ok(analysis) => SourceReportJson {
                source: &report.source,
                error: None,
                analysis: Some(analysis_json(analysis)),
            },
            Err(err) => SourceReportJson {
                source: &report.source,
                error: Some(err.to_string()),
                analysis: None,
            },
        })
        .collect();

    serde_json::to_string_pretty(&json)
}

fn analysis_json(analysis: &SourceAnalysis) -> AnalysisJson<'_> {
    AnalysisJson {
        summary: &analysis.summary,
        lost: &analysis.lost,
        percentiles: analysis.percentiles.iter().map(percentile_json).collect(),
        timeouts: analysis
            .timeouts
            .as_ref()
            .map(|t| OutcomeJson::from_result(t, |spans| spans.as_slice())),
        windows: analysis.windows.iter().map(window_json).collect(),
    }
}

fn percentile_json(outcome: &PercentileOutcome) -> PercentileJson {
    PercentileJson {
        rank: outcome.rank,
        result: OutcomeJson::from_result(&outcome.value, |v| *v),
    }
}

fn window_json(outcome: &WindowOutcome) -> WindowJson<'_> {
    WindowJson {
        window_size: outcome.window_size,
        result: OutcomeJson::from_result(&outcome.series, |series| WindowSeriesJson {
            summary: series.summary(),
            windows: &series.windows,
        }),
    }
}
