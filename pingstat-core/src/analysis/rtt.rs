use crate::analysis::error::AnalysisError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RttStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Sample standard deviation; `None` with fewer than two replies.
    pub stddev: Option<f64>,
}

pub fn rtt_stats(values: &[f64]) -> Result<RttStats, AnalysisError> {
    let Some(&first) = values.first() else {
        return Err(AnalysisError::insufficient("rtt", 1, 0));
    };

    let (min, max) = values
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    Ok(RttStats {
        min,
        max,
        mean: mean(values),
        stddev: stddev(values).ok(),
    })
}

/// Sample standard deviation (`n - 1` denominator).
pub fn stddev(values: &[f64]) -> Result<f64, AnalysisError> {
    if values.len() < 2 {
        return Err(AnalysisError::insufficient("stddev", 2, values.len()));
    }

    let mean = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();

    Ok((sum_sq / (values.len() - 1) as f64).sqrt())
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
