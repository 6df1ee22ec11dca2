use thiserror::Error;

/// Failure of a single analysis operation.
///
/// Every variant is scoped to the operation that produced it: an invalid
/// percentile rank rejects that rank only, an empty source rejects that
/// source only. Callers decide how to aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("sequence map has no entries")]
    EmptyInput,

    #[error("{statistic} needs at least {required} value(s), got {available}")]
    InsufficientData {
        statistic: &'static str,
        required: usize,
        available: usize,
    },

    #[error("invalid percentile rank {rank} (must be between 0 and 100)")]
    InvalidRank { rank: i64 },

    #[error(
        "invalid timeout threshold {threshold} (must be at least 1 and below the sequence span {span})"
    )]
    InvalidThreshold { threshold: u64, span: u64 },

    #[error(
        "invalid window size {window_size} (must be at least 1 and below the sequence span {span})"
    )]
    InvalidWindow { window_size: u64, span: u64 },

    #[error("sequence range {min}..={max} holds more numbers than a u64 can count")]
    RangeTooWide { min: u64, max: u64 },

    #[error("window size {window_size} splits the range into {windows} windows (limit {limit})")]
    TooManyWindows {
        window_size: u64,
        windows: u64,
        limit: u64,
    },
}

impl AnalysisError {
    pub(crate) fn insufficient(statistic: &'static str, required: usize, available: usize) -> Self {
        Self::InsufficientData {
            statistic,
            required,
            available,
        }
    }
}
