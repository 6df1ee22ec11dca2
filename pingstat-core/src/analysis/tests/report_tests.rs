use super::map_of;
use crate::analysis::{
    AnalysisError, AnalysisRequest, LostRange, SequenceMap, SequenceRange, TimeoutSpan, analyze,
};
use pretty_assertions::assert_eq;

fn request() -> AnalysisRequest {
    AnalysisRequest {
        percentiles: vec![50, 150, 90],
        timeout: Some(2),
        windows: vec![3, 100],
    }
}

fn sample_map() -> SequenceMap {
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

#[test]
fn analyze_builds_summary() {
    // Act
    let analysis = analyze(&sample_map(), &AnalysisRequest::default()).unwrap();

    // Assert
    let summary = &analysis.summary;
    assert_eq!(summary.range, SequenceRange { min: 1, max: 10 });
    assert_eq!(summary.transmitted, 10);
    assert_eq!(summary.received, 6);
    assert_eq!(summary.lost, 4);
    assert!((summary.loss_rate_pct - 40.0).abs() < 1e-9);
    assert_eq!(summary.rtt.min, 10.0);
    assert_eq!(summary.rtt.max, 60.0);
    assert_eq!(summary.rtt.mean, 35.0);
    assert!(summary.rtt.stddev.is_some());
    assert_eq!(
        analysis.lost,
        vec![
            LostRange { first: 3, last: 3 },
            LostRange { first: 5, last: 6 },
            LostRange { first: 9, last: 9 },
        ]
    );
    assert!(analysis.percentiles.is_empty());
    assert!(analysis.timeouts.is_none());
    assert!(analysis.windows.is_empty());
}

#[test]
fn analyze_keeps_partial_failures_next_to_results() {
    // Act
    let analysis = analyze(&sample_map(), &request()).unwrap();

    // Assert
    assert_eq!(analysis.percentiles.len(), 3);
    assert_eq!(analysis.percentiles[0].value, Ok(35.0));
    assert_eq!(
        analysis.percentiles[1].value,
        Err(AnalysisError::InvalidRank { rank: 150 })
    );
    assert!(analysis.percentiles[2].value.is_ok());

    assert_eq!(
        analysis.timeouts,
        Some(Ok(vec![TimeoutSpan::new(4, 7)]))
    );

    assert!(analysis.windows[0].series.is_ok());
    assert!(analysis.windows[1].series.is_err());

    let rejected: Vec<&AnalysisError> = analysis.rejections().collect();
    assert_eq!(rejected.len(), 2);
}

#[test]
fn analyze_rejects_empty_source() {
    let result = analyze(&SequenceMap::new(), &request());

    assert_eq!(result, Err(AnalysisError::EmptyInput));
}

#[test]
fn single_observation_summary() {
    // Act
    let analysis = analyze(&map_of(&[17]), &request()).unwrap();

    // Assert
    assert_eq!(analysis.summary.lost, 0);
    assert_eq!(analysis.summary.loss_rate_pct, 0.0);
    assert_eq!(analysis.summary.rtt.stddev, None);
    assert!(matches!(
        analysis.timeouts,
        Some(Err(AnalysisError::InvalidThreshold { span: 0, .. }))
    ));
    assert!(analysis.windows.iter().all(|w| w.series.is_err()));
}

#[test]
fn analyze_is_idempotent() {
    // Arrange
    let map = sample_map();
    let request = request();

    // Act
    let first = analyze(&map, &request).unwrap();
    let second = analyze(&map, &request).unwrap();

    // Assert
    assert_eq!(first, second);
}
