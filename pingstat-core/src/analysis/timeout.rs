use crate::analysis::error::AnalysisError;
use crate::analysis::sequence::SequenceRange;
use serde::Serialize;

/// Two consecutive observed replies with more than the threshold between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeoutSpan {
    pub before: u64,
    pub after: u64,
    pub implied_lost: u64,
}

impl TimeoutSpan {
    pub fn new(before: u64, after: u64) -> Self {
        Self {
            before,
            after,
            implied_lost: after - before - 1,
        }
    }
}

/// Finds gaps wider than `threshold` between consecutive observed sequence
/// numbers.
///
/// `observed` must be sorted ascending. Only gaps bounded by two replies are
/// reported, so timeouts before the first or after the last reply never
/// appear.
pub fn timeout_spans(
    range: SequenceRange,
    observed: &[u64],
    threshold: u64,
) -> Result<Vec<TimeoutSpan>, AnalysisError> {
    if threshold < 1 || threshold >= range.span() {
        return Err(AnalysisError::InvalidThreshold {
            threshold,
            span: range.span(),
        });
    }
    debug_assert!(observed.is_sorted());

    Ok(observed
        .windows(2)
        .filter(|pair| pair[1] - pair[0] > threshold)
        .map(|pair| TimeoutSpan::new(pair[0], pair[1]))
        .collect())
}
