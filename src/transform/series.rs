//! Daily deltas from cumulative historical series.

use crate::error::{CovmapError, Result};
use crate::models::{DeltaPoint, Metric, Timeline};

/// Turn a cumulative timeline into per-date new counts for one metric.
///
/// Dates are walked in the delivered order of the `cases` series, whatever
/// the metric: the API reports the same date keys for all three series.
/// The first date has no predecessor and yields no point, so `n` dates give
/// `n - 1` points (none for `n <= 1`).
///
/// # Errors
///
/// * [`CovmapError::InvalidInput`] when the timeline has no `cases` series.
/// * [`CovmapError::MissingMetricData`] when the metric's series is absent
///   or lacks a date present in `cases`.
/// * [`CovmapError::InvalidInput`] when a delta does not fit in an `i64`.
pub fn build_series(timeline: &Timeline, metric: Metric) -> Result<Vec<DeltaPoint>> {
    let cases = timeline
        .cases
        .as_ref()
        .ok_or_else(|| CovmapError::InvalidInput("timeline has no cases series".into()))?;

    let mut dates = cases.dates();
    let Some(first) = dates.next() else {
        return Ok(Vec::new());
    };

    let values = timeline
        .series(metric)
        .ok_or_else(|| missing(metric, first))?;

    let mut previous = values.get(first).ok_or_else(|| missing(metric, first))?;
    let mut points = Vec::with_capacity(cases.len().saturating_sub(1));
    for date in dates {
        let current = values.get(date).ok_or_else(|| missing(metric, date))?;
        let delta = current.checked_sub(previous).ok_or_else(|| {
            CovmapError::InvalidInput(format!("{metric} delta for {date} overflows"))
        })?;
        points.push(DeltaPoint::new(date, delta));
        previous = current;
    }

    Ok(points)
}

fn missing(metric: Metric, date: &str) -> CovmapError {
    CovmapError::MissingMetricData {
        metric,
        date: date.to_string(),
    }
}
