//! Ordering of region snapshots for the table and the map.

use std::cmp::{Ordering, Reverse};

use crate::models::{Metric, RegionSnapshot};

/// Order regions by total cases, largest first.
///
/// Equivalent to [`rank_by`] with [`Metric::Cases`].
pub fn rank(records: &[RegionSnapshot]) -> Vec<RegionSnapshot> {
    rank_by(records, Metric::Cases)
}

/// Order regions by a metric's running total, largest first.
///
/// The order is total: regions without a value for the metric sort after
/// every region that has one, and equal values fall back to the region
/// name, ascending. The output is always a permutation of the input.
pub fn rank_by(records: &[RegionSnapshot], metric: Metric) -> Vec<RegionSnapshot> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| compare(a, b, metric));
    ranked
}

fn compare(a: &RegionSnapshot, b: &RegionSnapshot, metric: Metric) -> Ordering {
    // Option orders None below Some, so Reverse puts missing values last.
    Reverse(a.total(metric))
        .cmp(&Reverse(b.total(metric)))
        .then_with(|| a.name().cmp(b.name()))
}
