mod report_tests;
mod rtt_tests;

use crate::analysis::SequenceMap;

/// Sequence map with a constant RTT for every observed key.
pub(super) fn map_of(keys: &[u64]) -> SequenceMap {
    keys.iter().map(|&seq| (seq, 10.0)).collect()
}
