//! Ping log ingestion.
//!
//! Reads a log line by line, keeps the lines that carry a reply
//! (`icmp_seq=N ... time=X`), and builds the [`SequenceMap`] the analysis
//! engine works on. Everything else in the log is counted and dropped.

mod error;
mod parse;

#[cfg(test)]
mod tests;

pub use error::IngestError;
pub use parse::{ProbeReply, parse_reply};

use crate::analysis::SequenceMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub lines: usize,
    pub replies: usize,
    /// Replies whose sequence number was already seen; the later one wins.
    pub duplicates: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Ingested {
    pub map: SequenceMap,
    pub stats: IngestStats,
}

pub fn load_sequence_map(path: &Path) -> Result<Ingested, IngestError> {
    let file = File::open(path).map_err(|e| IngestError::read_file(path, e))?;
    let ingested =
        read_sequence_map(BufReader::new(file)).map_err(|e| IngestError::read_file(path, e))?;

    debug!(
        source = %path.display(),
        lines = ingested.stats.lines,
        replies = ingested.stats.replies,
        duplicates = ingested.stats.duplicates,
        skipped = ingested.stats.skipped,
        "ping log ingested"
    );

    Ok(ingested)
}

/// Builds a sequence map from any line-oriented reader.
///
/// Invalid UTF-8 is replaced rather than treated as an error; ping output is
/// ASCII and a stray byte should not discard the whole log.
pub fn read_sequence_map<R: BufRead>(mut reader: R) -> io::Result<Ingested> {
    let mut ingested = Ingested::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        ingested.stats.lines += 1;

        let line = String::from_utf8_lossy(&buf);
        match parse_reply(line.trim_end()) {
            Some(reply) => {
                ingested.stats.replies += 1;
                if ingested.map.insert(reply.seq, reply.rtt_ms).is_some() {
                    ingested.stats.duplicates += 1;
                }
            }
            None => ingested.stats.skipped += 1,
        }
    }

    Ok(ingested)
}
