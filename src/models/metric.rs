use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CovmapError;

// ---------------------------------------------------------------------------
// Metric — Which counter is active for display, ranking, and charting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Cases,
    Recovered,
    Deaths,
}

impl Metric {
    /// All metrics in selector order.
    pub const ALL: [Metric; 3] = [Metric::Cases, Metric::Recovered, Metric::Deaths];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Cases => "cases",
            Metric::Recovered => "recovered",
            Metric::Deaths => "deaths",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = CovmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cases" => Ok(Metric::Cases),
            "recovered" => Ok(Metric::Recovered),
            "deaths" => Ok(Metric::Deaths),
            other => Err(CovmapError::InvalidArgument(format!(
                "Unknown metric '{}' (expected cases, recovered, or deaths)",
                other
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Selection — Region selector value
// ---------------------------------------------------------------------------

/// The region selector: either the whole-world aggregate or one region,
/// identified by the code the API accepts (ISO2, ISO3, or country name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    #[default]
    Worldwide,
    Region(String),
}

impl Selection {
    /// Build a selection from a raw selector value, mapping the
    /// `"worldwide"` sentinel (case-insensitive) to [`Selection::Worldwide`].
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(crate::config::WORLDWIDE) {
            Selection::Worldwide
        } else {
            Selection::Region(value.to_string())
        }
    }

    pub fn is_worldwide(&self) -> bool {
        matches!(self, Selection::Worldwide)
    }

    /// The selector value: the region code, or the worldwide sentinel.
    pub fn value(&self) -> &str {
        match self {
            Selection::Worldwide => crate::config::WORLDWIDE,
            Selection::Region(code) => code,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl Serialize for Selection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Selection::parse(&raw))
    }
}
