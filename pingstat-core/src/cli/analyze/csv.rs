use crate::analysis::{AnalysisRequest, SourceAnalysis, unique_in_order};
use crate::cli::analyze::render::timeout_line;
use crate::cli::analyze::types::SourceReport;

const BASE_COLUMNS: [&str; 9] = [
    "File Name",
    "Transmitted",
    "Received",
    "Packet Loss",
    "Loss Rate",
    "RTT Min",
    "RTT Max",
    "RTT Avg",
    "RTT STDDEV",
];

/// CSV table with one row per analyzed source. Failed sources are left out.
pub fn render_csv(request: &AnalysisRequest, reports: &[SourceReport]) -> String {
    let mut out = String::new();
    push_row(&mut out, csv_header(request));

    for report in reports {
        if let Ok(analysis) = &report.result {
            let name = report.source.display().to_string();
            push_row(&mut out, csv_row(&name, analysis));
        }
    }

    out
}

pub fn csv_header(request: &AnalysisRequest) -> Vec<String> {
    let mut header: Vec<String> = BASE_COLUMNS.iter().map(|c| c.to_string()).collect();

    for rank in unique_in_order(&request.percentiles) {
        header.push(format!("{rank:3}th Percentile"));
    }
    if let Some(threshold) = request.timeout {
        header.push(format!("Consecutive Timeout {threshold} packets"));
    }
    for size in unique_in_order(&request.windows) {
        header.push(format!("# of Incidents Per {size} Packets"));
    }

    header
}

pub fn csv_row(name: &str, analysis: &SourceAnalysis) -> Vec<String> {
    let summary = &analysis.summary;
    let rtt = &summary.rtt;

    let mut row = vec![
        name.to_string(),
        format!("{} packets", summary.transmitted),
        format!("{} packets", summary.received),
        format!("{} packets", summary.lost),
        format!("{:.2}%", summary.loss_rate_pct),
        format!("{:.3} ms", rtt.min),
        format!("{:.3} ms", rtt.max),
        format!("{:.3} ms", rtt.mean),
        rtt.stddev
            .map(|s| format!("{s:.3} ms"))
            .unwrap_or_else(|| "unavailable".to_string()),
    ];

    for outcome in &analysis.percentiles {
        row.push(match &outcome.value {
            Ok(value) => format!("{value:.3} ms"),
            Err(err) => format!("invalid: {err}"),
        });
    }

    if let Some(timeouts) = &analysis.timeouts {
        row.push(match timeouts {
            Ok(spans) if spans.is_empty() => "No Match!".to_string(),
            Ok(spans) => spans
                .iter()
                .map(timeout_line)
                .collect::<Vec<_>>()
                .join("\n"),
            Err(err) => format!("invalid: {err}"),
        });
    }

    for outcome in &analysis.windows {
        row.push(match &outcome.series {
            Ok(series) => {
                let summary = series.summary();
                format!(
                    "{} Incidents (Max {} packets lost)",
                    summary.incident_count, summary.max_lost
                )
            }
            Err(err) => format!("invalid: {err}"),
        });
    }

    row
}

/// Quotes a field when it holds a comma, a quote or a line break.
pub fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn push_row(out: &mut String, fields: Vec<String>) {
    let line = fields
        .iter()
        .map(|f| csv_field(f))
        .collect::<Vec<_>>()
        .join(",");
    out.push_str(&line);
    out.push('\n');
}
