use crate::analysis::error::AnalysisError;
use serde::Serialize;
use std::collections::BTreeMap;

/// Probe replies keyed by sequence number, iterated in ascending order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SequenceMap {
    replies: BTreeMap<u64, f64>,
}

impl SequenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a reply. A later reply for the same sequence number replaces
    /// the earlier one, which is returned.
    pub fn insert(&mut self, seq: u64, rtt_ms: f64) -> Option<f64> {
        self.replies.insert(seq, rtt_ms)
    }

    pub fn len(&self) -> usize {
        self.replies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replies.is_empty()
    }

    pub fn rtt(&self, seq: u64) -> Option<f64> {
        self.replies.get(&seq).copied()
    }

    /// Observed sequence numbers, ascending.
    pub fn sequence_numbers(&self) -> impl Iterator<Item = u64> + '_ {
        self.replies.keys().copied()
    }

    /// RTT values in sequence order.
    pub fn rtts(&self) -> impl Iterator<Item = f64> + '_ {
        self.replies.values().copied()
    }

    /// Number of observed sequence numbers in `start..=end`.
    pub fn observed_between(&self, start: u64, end: u64) -> u64 {
        if start > end {
            return 0;
        }
        self.replies.range(start..=end).count() as u64
    }
}

impl FromIterator<(u64, f64)> for SequenceMap {
    fn from_iter<I: IntoIterator<Item = (u64, f64)>>(iter: I) -> Self {
        let mut map = SequenceMap::new();
        for (seq, rtt_ms) in iter {
            map.insert(seq, rtt_ms);
        }
        map
    }
}

/// Closed interval `[min, max]` of transmitted sequence numbers implied by
/// the observed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SequenceRange {
    pub min: u64,
    pub max: u64,
}

impl SequenceRange {
    /// Number of sequence numbers in the range, observed or not.
    ///
    /// Fails only for the range covering every `u64`, whose count does not
    /// fit in a `u64`.
    pub fn transmitted(&self) -> Result<u64, AnalysisError> {
        self.span()
            .checked_add(1)
            .ok_or(AnalysisError::RangeTooWide {
                min: self.min,
                max: self.max,
            })
    }

    /// Distance between the first and last observed sequence numbers.
    /// Thresholds and window sizes are validated against this.
    pub fn span(&self) -> u64 {
        self.max - self.min
    }
}

/// Run of consecutive lost sequence numbers, `first..=last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LostRange {
    pub first: u64,
    pub last: u64,
}

impl LostRange {
    pub fn count(&self) -> u64 {
        self.last - self.first + 1
    }

    pub fn numbers(&self) -> impl Iterator<Item = u64> {
        self.first..=self.last
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reconstruction {
    pub range: SequenceRange,
    /// Gaps between consecutive replies, ascending.
    pub lost: Vec<LostRange>,
    transmitted: u64,
    lost_count: u64,
}

impl Reconstruction {
    pub fn transmitted(&self) -> u64 {
        self.transmitted
    }

    pub fn lost_count(&self) -> u64 {
        self.lost_count
    }

    pub fn received(&self) -> u64 {
        self.transmitted - self.lost_count
    }

    /// Lost sequence numbers one by one, ascending.
    pub fn lost_numbers(&self) -> impl Iterator<Item = u64> + '_ {
        self.lost.iter().flat_map(|run| run.numbers())
    }

    /// Lost share of the transmitted range, in percent.
    pub fn loss_rate(&self) -> f64 {
        if self.lost_count == 0 {
            return 0.0;
        }
        self.lost_count as f64 / self.transmitted as f64 * 100.0
    }
}

/// Derives the transmitted range and the lost runs from the observed
/// sequence numbers.
///
/// Work and memory are linear in the number of replies, however wide the
/// range between them is.
pub fn reconstruct(observed: &SequenceMap) -> Result<Reconstruction, AnalysisError> {
    let mut keys = observed.sequence_numbers();
    let first = keys.next().ok_or(AnalysisError::EmptyInput)?;

    let mut lost = Vec::new();
    let mut lost_count = 0u64;
    let mut last = first;
    for seq in keys {
        if seq - last > 1 {
            let gap = LostRange {
                first: last + 1,
                last: seq - 1,
            };
            lost_count += gap.count();
            lost.push(gap);
        }
        last = seq;
    }

    let range = SequenceRange {
        min: first,
        max: last,
    };

    Ok(Reconstruction {
        range,
        lost,
        transmitted: range.transmitted()?,
        lost_count,
    })
}
