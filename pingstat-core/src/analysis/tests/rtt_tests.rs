use crate::analysis::{AnalysisError, rtt_stats, stddev};
use pretty_assertions::assert_eq;

#[test]
fn rtt_stats_rejects_empty_values() {
    let result = rtt_stats(&[]);

    assert_eq!(
        result,
        Err(AnalysisError::InsufficientData {
            statistic: "rtt",
            required: 1,
            available: 0,
        })
    );
}

#[test]
fn rtt_stats_computes_min_max_mean_and_sample_stddev() {
    // Arrange
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

    // Act
    let stats = rtt_stats(&values).unwrap();

    // Assert
    assert_eq!(stats.min, 2.0);
    assert_eq!(stats.max, 9.0);
    assert_eq!(stats.mean, 5.0);
    // Sum of squared deviations is 32, n - 1 = 7.
    let expected = (32.0_f64 / 7.0).sqrt();
    assert!((stats.stddev.unwrap() - expected).abs() < 1e-12);
}

#[test]
fn single_value_reports_stddev_unavailable() {
    // Act
    let stats = rtt_stats(&[12.5]).unwrap();

    // Assert
    assert_eq!(stats.min, 12.5);
    assert_eq!(stats.max, 12.5);
    assert_eq!(stats.mean, 12.5);
    assert_eq!(stats.stddev, None);
}

#[test]
fn stddev_needs_two_values() {
    assert_eq!(
        stddev(&[1.0]),
        Err(AnalysisError::InsufficientData {
            statistic: "stddev",
            required: 2,
            available: 1,
        })
    );
    assert_eq!(stddev(&[1.0, 1.0]), Ok(0.0));
}

#[test]
fn stddev_of_two_values() {
    // (1 - 2)^2 + (3 - 2)^2 = 2, divided by n - 1 = 1.
    let value = stddev(&[1.0, 3.0]).unwrap();

    assert!((value - 2.0_f64.sqrt()).abs() < 1e-12);
}
