use serde::{Deserialize, Serialize};

use super::metric::Metric;
use super::summary::Summary;

// ---------------------------------------------------------------------------
// LatLng
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

// ---------------------------------------------------------------------------
// CountryInfo — Identification and placement block of a region record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryInfo {
    #[serde(rename = "_id", default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub iso2: Option<String>,
    #[serde(default)]
    pub iso3: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub long: Option<f64>,
    #[serde(default)]
    pub flag: Option<String>,
}

// ---------------------------------------------------------------------------
// RegionSnapshot — One entry of `/countries` (or `/countries/{code}`)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSnapshot {
    pub country: String,
    #[serde(default)]
    pub country_info: CountryInfo,
    #[serde(default)]
    pub continent: Option<String>,
    #[serde(flatten)]
    pub stats: Summary,
}

impl RegionSnapshot {
    pub fn name(&self) -> &str {
        &self.country
    }

    /// ISO 3166-1 alpha-2 code, when the API knows one.
    pub fn iso_code(&self) -> Option<&str> {
        self.country_info.iso2.as_deref()
    }

    /// The value the region selector uses for this region: the ISO2 code,
    /// or the country name for entries without one (ships, territories).
    pub fn selector_value(&self) -> &str {
        self.iso_code().unwrap_or(&self.country)
    }

    pub fn coordinates(&self) -> Option<LatLng> {
        match (self.country_info.lat, self.country_info.long) {
            (Some(lat), Some(lng)) => Some(LatLng::new(lat, lng)),
            _ => None,
        }
    }

    pub fn flag_url(&self) -> Option<&str> {
        self.country_info.flag.as_deref()
    }

    pub fn total(&self, metric: Metric) -> Option<i64> {
        self.stats.total(metric)
    }

    pub fn today(&self, metric: Metric) -> Option<i64> {
        self.stats.today(metric)
    }
}

// ---------------------------------------------------------------------------
// SelectionSummary — Result of a region-selector fetch
// ---------------------------------------------------------------------------

/// Counters for the current selection plus the coordinates the map should
/// recenter to (absent for the worldwide aggregate).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionSummary {
    pub summary: Summary,
    pub coordinates: Option<LatLng>,
}

impl From<RegionSnapshot> for SelectionSummary {
    fn from(region: RegionSnapshot) -> Self {
        let coordinates = region.coordinates();
        Self {
            summary: region.stats,
            coordinates,
        }
    }
}

impl From<Summary> for SelectionSummary {
    fn from(summary: Summary) -> Self {
        Self {
            summary,
            coordinates: None,
        }
    }
}
