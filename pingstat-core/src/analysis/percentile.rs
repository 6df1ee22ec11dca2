use crate::analysis::error::AnalysisError;
use crate::analysis::unique_in_order;
use std::ops::RangeInclusive;

pub const RANK_RANGE: RangeInclusive<i64> = 0..=100;

#[derive(Debug, Clone, PartialEq)]
pub struct PercentileOutcome {
    pub rank: i64,
    pub value: Result<f64, AnalysisError>,
}

/// Computes each requested rank independently.
///
/// Output follows the first occurrence of each rank in `ranks`; repeated
/// ranks are computed once. A rank outside `0..=100` fails on its own
/// without affecting the others.
pub fn percentiles(values: &[f64], ranks: &[i64]) -> Vec<PercentileOutcome> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    unique_in_order(ranks)
        .into_iter()
        .map(|rank| PercentileOutcome {
            rank,
            value: percentile_of_sorted(&sorted, rank),
        })
        .collect()
}

/// Linear interpolation between the closest ranks at `rank/100 * (n - 1)`.
pub fn percentile_of_sorted(sorted: &[f64], rank: i64) -> Result<f64, AnalysisError> {
    if !RANK_RANGE.contains(&rank) {
        return Err(AnalysisError::InvalidRank { rank });
    }
    if sorted.is_empty() {
        return Err(AnalysisError::insufficient("percentile", 1, 0));
    }

    let pos = rank as f64 / 100.0 * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;

    Ok(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}
