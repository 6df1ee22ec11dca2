use crate::analysis::{AnalysisError, SourceAnalysis};
use crate::ingest::IngestError;
use std::path::PathBuf;
use thiserror::Error;

/// Outcome of one ping log, in the order the logs were given.
#[derive(Debug)]
pub struct SourceReport {
    pub source: PathBuf,
    pub result: Result<SourceAnalysis, SourceError>,
}

impl SourceReport {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("analysis worker panicked")]
    WorkerPanicked,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyzeOutcome {
    pub analyzed: usize,
    pub failed: usize,
}
