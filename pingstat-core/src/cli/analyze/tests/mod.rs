
use crate::analysis::{AnalysisError, AnalysisRequest, SequenceMap, analyze};
use crate::cli::analyze::{SourceError, SourceReport};
use std::path::PathBuf;

/// Range `[1, 10]` with 3, 5, 6 and 9 lost.
pub(super) fn fixture_map() -> SequenceMap {
    [
        (1, 10.0),
        (2, 20.0),
        (4, 30.0),
        (7, 40.0),
        (8, 50.0),
        (10, 60.0),
    ]
    .into_iter()
    .collect()
}

/// One valid and one rejected entry per parameter kind.
pub(super) fn fixture_request() -> AnalysisRequest {
    AnalysisRequest {
        percentiles: vec![50, 101],
        timeout: Some(2),
        windows: vec![3, 9],
    }
}

pub(super) fn ok_report(name: &str) -> SourceReport {
    SourceReport {
        source: PathBuf::from(name),
        result: Ok(analyze(&fixture_map(), &fixture_request()).unwrap()),
    }
}

pub(super) fn failed_report(name: &str) -> SourceReport {
    SourceReport {
        source: PathBuf::from(name),
        result: Err(SourceError::Analysis(AnalysisError::EmptyInput)),
    }
}
