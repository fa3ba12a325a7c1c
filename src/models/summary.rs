use serde::{Deserialize, Serialize};

use super::metric::Metric;

// ---------------------------------------------------------------------------
// Summary — Whole-world aggregate or a single region's counters
// ---------------------------------------------------------------------------

/// Counters for the worldwide aggregate (`/all`) or one region.
///
/// Every field is optional: the API omits or nulls counters it no longer
/// tracks (recoveries in particular), and a missing counter must render as
/// "no data" rather than zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(default)]
    pub cases: Option<i64>,
    #[serde(default)]
    pub today_cases: Option<i64>,
    #[serde(default)]
    pub deaths: Option<i64>,
    #[serde(default)]
    pub today_deaths: Option<i64>,
    #[serde(default)]
    pub recovered: Option<i64>,
    #[serde(default)]
    pub today_recovered: Option<i64>,
    #[serde(default)]
    pub active: Option<i64>,
    #[serde(default)]
    pub critical: Option<i64>,
    #[serde(default)]
    pub population: Option<i64>,
    /// Last update, epoch milliseconds.
    #[serde(default)]
    pub updated: Option<i64>,
}

impl Summary {
    /// Running total for a metric.
    pub fn total(&self, metric: Metric) -> Option<i64> {
        match metric {
            Metric::Cases => self.cases,
            Metric::Recovered => self.recovered,
            Metric::Deaths => self.deaths,
        }
    }

    /// Current-period delta for a metric.
    pub fn today(&self, metric: Metric) -> Option<i64> {
        match metric {
            Metric::Cases => self.today_cases,
            Metric::Recovered => self.today_recovered,
            Metric::Deaths => self.today_deaths,
        }
    }
}
