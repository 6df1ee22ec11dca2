use crate::conf::report::ValidationReport;

#[derive(Debug, Clone)]
pub struct RangeConstraint<T> {
    pub min: T,
    /// `None` leaves the range open above `min`.
    pub max: Option<T>,
    pub label: &'static str,
    pub units: Option<&'static str>,
}

pub const PERCENTILE_RANK: RangeConstraint<i64> = RangeConstraint {
    min: 0,
    max: Some(100),
    label: "percentiles",
    units: None,
};

pub const TIMEOUT_THRESHOLD: RangeConstraint<u64> = RangeConstraint {
    min: 1,
    max: None,
    label: "timeout",
    units: Some(" packets"),
};

pub const WINDOW_SIZE: RangeConstraint<u64> = RangeConstraint {
    min: 1,
    max: None,
    label: "windows",
    units: Some(" packets"),
};

pub fn validate_range<T>(value: T, constraint: &RangeConstraint<T>, report: &mut ValidationReport)
where
    T: PartialOrd + std::fmt::Display,
{
    let units = constraint.units.unwrap_or("");
    let bounds = match &constraint.max {
        Some(max) if value < constraint.min || value > *max => format!(
            "must be between {}{} and {}{}",
            constraint.min, units, max, units
        ),
        None if value < constraint.min => format!("must be at least {}{}", constraint.min, units),
        _ => return,
    };

    report.error(
        format!(
            "invalid {}: {}{} ({})",
            constraint.label, value, units, bounds
        ),
        None,
    );
}
