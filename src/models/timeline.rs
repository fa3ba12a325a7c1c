use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

use super::metric::Metric;

/// Date format of historical keys, e.g. `1/22/20`.
pub const DATE_FORMAT: &str = "%m/%d/%y";

// ---------------------------------------------------------------------------
// CumulativeSeries — date -> running total, in delivered order
// ---------------------------------------------------------------------------

/// A per-metric running total keyed by date label.
///
/// Entries keep the order in which the API delivered them; nothing here
/// re-sorts by date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CumulativeSeries {
    entries: Vec<(String, i64)>,
    /// Date label -> position in `entries`.
    index: HashMap<String, usize>,
}

impl CumulativeSeries {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Append an entry. A repeated date replaces the earlier value in place.
    pub fn push(&mut self, date: impl Into<String>, value: i64) {
        let date = date.into();
        match self.index.get(&date) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.index.insert(date.clone(), self.entries.len());
                self.entries.push((date, value));
            }
        }
    }

    pub fn get(&self, date: &str) -> Option<i64> {
        self.index.get(date).map(|&pos| self.entries[pos].1)
    }

    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(d, _)| d.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(d, v)| (d.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for CumulativeSeries {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        let mut series = CumulativeSeries::new();
        for (date, value) in iter {
            series.push(date, value);
        }
        series
    }
}

impl Serialize for CumulativeSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (date, value) in &self.entries {
            map.serialize_entry(date, value)?;
        }
        map.end()
    }
}

struct SeriesVisitor;

impl<'de> Visitor<'de> for SeriesVisitor {
    type Value = CumulativeSeries;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of date labels to cumulative counts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut series = CumulativeSeries::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((date, value)) = access.next_entry::<String, i64>()? {
            series.push(date, value);
        }
        Ok(series)
    }
}

impl<'de> Deserialize<'de> for CumulativeSeries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SeriesVisitor)
    }
}

// ---------------------------------------------------------------------------
// Timeline — The three cumulative series of one historical payload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    #[serde(default)]
    pub cases: Option<CumulativeSeries>,
    #[serde(default)]
    pub deaths: Option<CumulativeSeries>,
    #[serde(default)]
    pub recovered: Option<CumulativeSeries>,
}

impl Timeline {
    pub fn series(&self, metric: Metric) -> Option<&CumulativeSeries> {
        match metric {
            Metric::Cases => self.cases.as_ref(),
            Metric::Recovered => self.recovered.as_ref(),
            Metric::Deaths => self.deaths.as_ref(),
        }
    }
}

// ---------------------------------------------------------------------------
// RegionHistory — Envelope of `/historical/{code}`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionHistory {
    pub country: String,
    /// Provinces covered by the aggregate; `["mainland"]` for most regions.
    #[serde(default)]
    pub province: Option<Vec<String>>,
    pub timeline: Timeline,
}

// ---------------------------------------------------------------------------
// DeltaPoint — One chart point: new count for a date
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeltaPoint {
    pub x: String,
    pub y: i64,
}

impl DeltaPoint {
    pub fn new(x: impl Into<String>, y: i64) -> Self {
        Self { x: x.into(), y }
    }

    /// Parse the date label (`M/D/YY`) for a time axis.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.x, DATE_FORMAT).ok()
    }
}
