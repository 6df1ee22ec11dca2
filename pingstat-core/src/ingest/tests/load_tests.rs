use crate::analysis::{AnalysisError, AnalysisRequest, analyze};
use crate::ingest::{IngestError, IngestStats, load_sequence_map, read_sequence_map};
use pretty_assertions::assert_eq;
use std::io::Cursor;
use tempfile::tempdir;

const LOG: &str = "\
PING example.com (93.184.216.34): 56 data bytes
Request timeout for icmp_seq 0
64 bytes from 93.184.216.34: icmp_seq=1 ttl=56 time=10.100 ms
64 bytes from 93.184.216.34: icmp_seq=2 ttl=56 time=12.200 ms
Request timeout for icmp_seq 3
64 bytes from 93.184.216.34: icmp_seq=4 ttl=56 time=30.300 ms
64 bytes from 93.184.216.34: icmp_seq=2 ttl=56 time=99.900 ms (DUP!)

--- example.com ping statistics ---
";

#[test]
fn reads_replies_and_counts_the_rest() {
    // Act
    let ingested = read_sequence_map(Cursor::new(LOG)).unwrap();

    // Assert
    let keys: Vec<u64> = ingested.map.sequence_numbers().collect();
    assert_eq!(keys, vec![1, 2, 4]);
    assert_eq!(ingested.map.rtt(2), Some(99.9));
    assert_eq!(
        ingested.stats,
        IngestStats {
            lines: 9,
            replies: 4,
            duplicates: 1,
            skipped: 5,
        }
    );
}

#[test]
fn tolerates_invalid_utf8() {
    // Arrange
    let mut bytes = b"garbage \xff\xfe line\n".to_vec();
    bytes.extend_from_slice(b"icmp_seq=5 ttl=1 time=2.5 ms\n");

    // Act
    let ingested = read_sequence_map(Cursor::new(bytes)).unwrap();

    // Assert
    assert_eq!(ingested.map.rtt(5), Some(2.5));
    assert_eq!(ingested.stats.skipped, 1);
}

#[test]
fn handles_missing_trailing_newline_and_crlf() {
    let log = "icmp_seq=1 time=1.0 ms\r\nicmp_seq=2 time=2.0 ms";

    let ingested = read_sequence_map(Cursor::new(log)).unwrap();

    assert_eq!(ingested.map.len(), 2);
    assert_eq!(ingested.stats.lines, 2);
}

#[test]
fn loads_from_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("ping.txt");
    std::fs::write(&path, LOG).unwrap();

    // Act
    let ingested = load_sequence_map(&path).unwrap();

    // Assert
    assert_eq!(ingested.map.len(), 3);
}

#[test]
fn missing_file_reports_path() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    // Act
    let err = load_sequence_map(&path).unwrap_err();

    // Assert
    let IngestError::ReadFile { path: reported, .. } = &err;
    assert_eq!(reported, &path);
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn extreme_sequence_numbers_fail_the_source_without_panicking() {
    // Arrange
    let log = "\
64 bytes from 10.0.0.1: icmp_seq=0 ttl=64 time=1.0 ms
64 bytes from 10.0.0.1: icmp_seq=18446744073709551615 ttl=64 time=2.0 ms
";
    let ingested = read_sequence_map(Cursor::new(log)).unwrap();

    // Act
    let result = analyze(&ingested.map, &AnalysisRequest::default());

    // Assert
    assert_eq!(
        result,
        Err(AnalysisError::RangeTooWide {
            min: 0,
            max: u64::MAX,
        })
    );
}

#[test]
fn wrapped_sequence_number_is_analyzed_compactly() {
    // Arrange
    let log = "\
64 bytes from 10.0.0.1: icmp_seq=0 ttl=64 time=1.0 ms
64 bytes from 10.0.0.1: icmp_seq=4294967295 ttl=64 time=2.0 ms
";
    let ingested = read_sequence_map(Cursor::new(log)).unwrap();

    // Act
    let analysis = analyze(&ingested.map, &AnalysisRequest::default()).unwrap();

    // Assert
    assert_eq!(analysis.summary.transmitted, 4_294_967_296);
    assert_eq!(analysis.summary.lost, 4_294_967_294);
    assert_eq!(analysis.lost.len(), 1);
}
