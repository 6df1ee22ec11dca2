use pingstat_core::analysis::{AnalysisRequest, analyze};
use pingstat_core::cli::analyze::{AnalyzeArgs, run_analyze};
use pingstat_core::ingest::load_sequence_map;
use pingstat_core::logging::OutputFormat;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A ping log on disk becomes a CSV row on disk
#[test]
fn log_file_to_csv_file() {
    let dir = tempdir().unwrap();
    let settings = dir.path().join("pingstat.hcl");
    let output = dir.path().join("report.csv");
    fs::write(&settings, "timeout = 2\nwindows = [5]\n").unwrap();

    let outcome = run_analyze(AnalyzeArgs {
        files: vec![fixture("linux.log")],
        output: Some(output.clone()),
        format: Some(OutputFormat::Plain),
        config: Some(settings),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(outcome.analyzed, 1);
    assert_eq!(outcome.failed, 0);

    let csv = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "File Name,Transmitted,Received,Packet Loss,Loss Rate,RTT Min,RTT Max,RTT Avg,RTT STDDEV,\
         Consecutive Timeout 2 packets,# of Incidents Per 5 Packets"
    );

    let cells: Vec<&str> = lines[1].split(',').collect();
    assert!(cells[0].ends_with("linux.log"), "unexpected row: {}", lines[1]);
    assert_eq!(
        &cells[1..8],
        &[
            "10 packets",
            "6 packets",
            "4 packets",
            "40.00%",
            "11.900 ms",
            "14.600 ms",
            "12.800 ms",
        ]
    );
    assert_eq!(cells[9], "Seq 5 to 9 : 3 packets lost");
    assert_eq!(cells[10], "2 Incidents (Max 3 packets lost)");
}

/// Several logs, one of them missing, still produce a CSV for the rest
#[test]
fn missing_source_does_not_block_the_others() {
    let dir = tempdir().unwrap();
    let settings = dir.path().join("pingstat.hcl");
    let output = dir.path().join("report.csv");
    fs::write(&settings, "percentiles = [50]\n").unwrap();

    let outcome = run_analyze(AnalyzeArgs {
        files: vec![
            fixture("macos.log"),
            dir.path().join("missing.log"),
            fixture("linux.log"),
        ],
        output: Some(output.clone()),
        format: Some(OutputFormat::Json),
        config: Some(settings),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(outcome.analyzed, 2);
    assert_eq!(outcome.failed, 1);

    let csv = fs::read_to_string(&output).unwrap();
    let rows: Vec<&str> = csv.lines().skip(1).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].contains("macos.log,4 packets,3 packets,1 packets,25.00%"));
    assert!(rows[1].contains("linux.log,10 packets"));
}

/// Ingest skips headers, timeouts and summaries
#[test]
fn ingest_keeps_only_replies() {
    let ingested = load_sequence_map(&fixture("macos.log")).unwrap();

    assert_eq!(ingested.map.len(), 3);
    assert_eq!(ingested.stats.replies, 3);
    assert_eq!(ingested.stats.lines, 9);
    assert_eq!(ingested.stats.skipped, 6);
}

/// Running the pipeline twice gives the same result
#[test]
fn analysis_is_idempotent() {
    let ingested = load_sequence_map(&fixture("linux.log")).unwrap();
    let request = AnalysisRequest {
        percentiles: vec![50, 90],
        timeout: Some(1),
        windows: vec![3],
    };

    let first = analyze(&ingested.map, &request).unwrap();
    let second = analyze(&ingested.map, &request).unwrap();

    assert_eq!(first, second);
}
