//! Sequence-gap and interval statistics.
//!
//! The engine works on one [`SequenceMap`] per source:
//!
//! SequenceMap
//! reconstruct -> Reconstruction (range, lost)
//! rtt_stats / percentiles
//! timeout_spans / windowed_loss
//! SourceAnalysis
//!
//! Nothing here performs I/O or keeps state between calls.

mod error;
mod percentile;
mod report;
mod rtt;
mod sequence;
mod timeout;
mod window;

#[cfg(test)]
mod tests;

pub use error::AnalysisError;
pub use percentile::*;
pub use report::*;
pub use rtt::*;
pub use sequence::*;
pub use timeout::*;
pub use window::*;

/// Distinct items in order of first appearance.
pub(crate) fn unique_in_order<T: PartialEq + Copy>(items: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(item) {
            out.push(*item);
        }
    }
    out
}
