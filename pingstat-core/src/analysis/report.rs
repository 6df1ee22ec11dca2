use crate::analysis::error::AnalysisError;
use crate::analysis::percentile::{PercentileOutcome, percentiles};
use crate::analysis::rtt::{RttStats, rtt_stats};
use crate::analysis::sequence::{LostRange, SequenceMap, SequenceRange, reconstruct};
use crate::analysis::timeout::{TimeoutSpan, timeout_spans};
use crate::analysis::window::{WindowOutcome, windowed_loss_many};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Optional analyses to run on top of the summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub percentiles: Vec<i64>,
    pub timeout: Option<u64>,
    pub windows: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub range: SequenceRange,
    pub transmitted: u64,
    pub received: u64,
    pub lost: u64,
    pub loss_rate_pct: f64,
    pub rtt: RttStats,
}

/// Everything derived from one source.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceAnalysis {
    pub summary: Summary,
    /// Runs of lost sequence numbers, ascending.
    pub lost: Vec<LostRange>,
    pub percentiles: Vec<PercentileOutcome>,
    /// `None` when no threshold was requested.
    pub timeouts: Option<Result<Vec<TimeoutSpan>, AnalysisError>>,
    pub windows: Vec<WindowOutcome>,
}

/// Runs the whole engine over one sequence map.
///
/// Only an empty map fails the call. Rejected ranks, thresholds and window
/// sizes are carried inside the result next to the values that succeeded.
pub fn analyze(
    map: &SequenceMap,
    request: &AnalysisRequest,
) -> Result<SourceAnalysis, AnalysisError> {
    let reconstruction = reconstruct(map)?;
    let range = reconstruction.range;

    let rtts: Vec<f64> = map.rtts().collect();
    let rtt = rtt_stats(&rtts)?;

    let percentiles = percentiles(&rtts, &request.percentiles);

    let timeouts = request.timeout.map(|threshold| {
        let observed: Vec<u64> = map.sequence_numbers().collect();
        timeout_spans(range, &observed, threshold)
    });

    let windows = windowed_loss_many(range, map, &request.windows);

    let analysis = SourceAnalysis {
        summary: Summary {
            range,
            transmitted: reconstruction.transmitted(),
            received: reconstruction.received(),
            lost: reconstruction.lost_count(),
            loss_rate_pct: reconstruction.loss_rate(),
            rtt,
        },
        lost: reconstruction.lost,
        percentiles,
        timeouts,
        windows,
    };

    for err in analysis.rejections() {
        debug!(error = %err, "analysis parameter rejected");
    }

    Ok(analysis)
}

impl SourceAnalysis {
    /// Errors attached to individual parameters.
    pub fn rejections(&self) -> impl Iterator<Item = &AnalysisError> {
        let ranks = self.percentiles.iter().filter_map(|p| p.value.as_ref().err());
        let timeouts = self.timeouts.iter().filter_map(|t| t.as_ref().err());
        let windows = self.windows.iter().filter_map(|w| w.series.as_ref().err());

        ranks.chain(timeouts).chain(windows)
    }
}
