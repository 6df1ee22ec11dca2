use crate::analysis::error::AnalysisError;
use crate::analysis::sequence::{SequenceMap, SequenceRange};
use crate::analysis::unique_in_order;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowRecord {
    pub start: u64,
    pub end: u64,
    pub lost: u64,
}

/// Compact per-size reduction used by the CSV artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WindowSummary {
    /// Windows with at least one lost packet.
    pub incident_count: u64,
    pub max_lost: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowSeries {
    pub window_size: u64,
    pub windows: Vec<WindowRecord>,
}

impl WindowSeries {
    pub fn summary(&self) -> WindowSummary {
        self.windows
            .iter()
            .fold(WindowSummary::default(), |acc, w| WindowSummary {
                incident_count: acc.incident_count + u64::from(w.lost > 0),
                max_lost: acc.max_lost.max(w.lost),
            })
    }

    pub fn total_lost(&self) -> u64 {
        self.windows.iter().map(|w| w.lost).sum()
    }

    /// Windows that lost at least one packet.
    pub fn incidents(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.iter().filter(|w| w.lost > 0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowOutcome {
    pub window_size: u64,
    pub series: Result<WindowSeries, AnalysisError>,
}

/// Upper bound on the windows one series may hold.
pub const MAX_WINDOWS: u64 = 1 << 20;

/// Tiles `range` with windows of `window_size` sequence numbers, starting at
/// `range.min`. The last window stops at `range.max`.
///
/// Sizes of zero or at least the range span are rejected, never clamped. So
/// are sizes that would need more than [`MAX_WINDOWS`] windows.
pub fn windowed_loss(
    range: SequenceRange,
    observed: &SequenceMap,
    window_size: u64,
) -> Result<WindowSeries, AnalysisError> {
    if window_size < 1 || window_size >= range.span() {
        return Err(AnalysisError::InvalidWindow {
            window_size,
            span: range.span(),
        });
    }

    let count = range.span() / window_size + 1;
    if count > MAX_WINDOWS {
        return Err(AnalysisError::TooManyWindows {
            window_size,
            windows: count,
            limit: MAX_WINDOWS,
        });
    }

    let mut windows = Vec::with_capacity(count as usize);
    let mut start = range.min;
    loop {
        let end = start.saturating_add(window_size - 1).min(range.max);
        let lost = (end - start + 1) - observed.observed_between(start, end);
        windows.push(WindowRecord { start, end, lost });

        if end == range.max {
            break;
        }
        start = end + 1;
    }

    Ok(WindowSeries {
        window_size,
        windows,
    })
}

/// Runs [`windowed_loss`] once per distinct size, keeping first-seen order.
/// An invalid size only fails its own entry.
pub fn windowed_loss_many(
    range: SequenceRange,
    observed: &SequenceMap,
    sizes: &[u64],
) -> Vec<WindowOutcome> {
    unique_in_order(sizes)
        .into_iter()
        .map(|window_size| WindowOutcome {
            window_size,
            series: windowed_loss(range, observed, window_size),
        })
        .collect()
}
