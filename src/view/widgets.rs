use serde::Serialize;

use crate::format::{format_compact_opt, format_thousands_opt, pretty_print_stat};
use crate::models::{DeltaPoint, LatLng, Metric, RegionSnapshot, Summary};

// ---------------------------------------------------------------------------
// MetricStyle — Per-metric colours and marker scale
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricStyle {
    pub hex: &'static str,
    pub rgb: &'static str,
    pub half_op: &'static str,
    pub multiplier: f64,
}

pub fn style(metric: Metric) -> MetricStyle {
    match metric {
        Metric::Cases => MetricStyle {
            hex: "#CC1034",
            rgb: "rgb(204, 16, 52)",
            half_op: "rgba(204, 16, 52, 0.5)",
            multiplier: 800.0,
        },
        Metric::Recovered => MetricStyle {
            hex: "#399639",
            rgb: "rgb(125, 215, 29)",
            half_op: "rgba(125, 215, 29, 0.5)",
            multiplier: 800.0,
        },
        Metric::Deaths => MetricStyle {
            hex: "#770303",
            rgb: "rgb(251, 68, 67)",
            half_op: "rgba(251, 68, 67, 0.5)",
            multiplier: 2400.0,
        },
    }
}

// ---------------------------------------------------------------------------
// InfoBox — One counter card
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoBox {
    pub title: &'static str,
    pub metric: Metric,
    pub active: bool,
    pub is_red: bool,
    /// Current-period delta, e.g. `+1.2k`.
    pub today: String,
    /// Running total, e.g. `3.4m`.
    pub total: String,
}

fn title(metric: Metric) -> &'static str {
    match metric {
        Metric::Cases => "Total Cases",
        Metric::Recovered => "Cured",
        Metric::Deaths => "Deaths",
    }
}

/// The three counter cards in selector order. Without a summary (still
/// loading or unavailable) every figure reads as no data.
pub fn info_boxes(summary: Option<&Summary>, active: Metric) -> Vec<InfoBox> {
    Metric::ALL
        .iter()
        .map(|&metric| InfoBox {
            title: title(metric),
            metric,
            active: metric == active,
            is_red: metric != Metric::Recovered,
            today: pretty_print_stat(summary.and_then(|s| s.today(metric))),
            total: format_compact_opt(summary.and_then(|s| s.total(metric))),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// MapMarker — Circle per region
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerPopup {
    pub flag: Option<String>,
    pub name: String,
    pub total: String,
    pub recovered: String,
    pub deaths: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub center: LatLng,
    /// Radius in metres: `sqrt(value) * multiplier`.
    pub radius: f64,
    pub color: &'static str,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
    pub weight: u32,
    pub popup: MarkerPopup,
}

pub const MARKER_FILL_OPACITY: f64 = 0.2;

/// Marker radius for a counter value.
pub fn marker_radius(value: i64, metric: Metric) -> f64 {
    (value.max(0) as f64).sqrt() * style(metric).multiplier
}

/// One marker per region that has both coordinates and a value for `metric`.
pub fn map_markers(regions: &[RegionSnapshot], metric: Metric) -> Vec<MapMarker> {
    let style = style(metric);
    regions
        .iter()
        .filter_map(|region| {
            let center = region.coordinates()?;
            let value = region.total(metric)?;
            Some(MapMarker {
                center,
                radius: marker_radius(value, metric),
                color: style.hex,
                fill_color: style.hex,
                fill_opacity: MARKER_FILL_OPACITY,
                weight: 1,
                popup: MarkerPopup {
                    flag: region.flag_url().map(str::to_string),
                    name: region.name().to_string(),
                    total: format_thousands_opt(region.total(Metric::Cases)),
                    recovered: format_thousands_opt(region.total(Metric::Recovered)),
                    deaths: format_thousands_opt(region.total(Metric::Deaths)),
                },
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// TableRow / RegionOption
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub name: String,
    pub cases: String,
}

/// Rows for already-ranked regions.
pub fn table_rows(ranked: &[RegionSnapshot]) -> Vec<TableRow> {
    ranked
        .iter()
        .map(|region| TableRow {
            name: region.name().to_string(),
            cases: format_thousands_opt(region.total(Metric::Cases)),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionOption {
    pub name: String,
    pub value: String,
}

/// Region selector entries: the worldwide sentinel, then regions in API order.
pub fn region_options(regions: &[RegionSnapshot]) -> Vec<RegionOption> {
    std::iter::once(RegionOption {
        name: "Worldwide".to_string(),
        value: crate::config::WORLDWIDE.to_string(),
    })
    .chain(regions.iter().map(|region| RegionOption {
        name: region.name().to_string(),
        value: region.selector_value().to_string(),
    }))
    .collect()
}

// ---------------------------------------------------------------------------
// ChartSeries — Line chart of daily deltas
// ---------------------------------------------------------------------------

pub const CHART_BORDER_COLOR: &str = "#db0a5b";
pub const CHART_BACKGROUND_COLOR: &str = "rgba(211, 84, 0, 0.5)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub title: String,
    pub metric: Metric,
    pub border_color: &'static str,
    pub background_color: &'static str,
    pub points: Vec<DeltaPoint>,
}

impl ChartSeries {
    pub fn new(metric: Metric, points: Vec<DeltaPoint>) -> Self {
        Self {
            title: format!("Worldwide new {}", metric),
            metric,
            border_color: CHART_BORDER_COLOR,
            background_color: CHART_BACKGROUND_COLOR,
            points,
        }
    }

    /// Tooltip label for a point, e.g. `+1,234`.
    pub fn tooltip(point: &DeltaPoint) -> String {
        crate::format::format_signed_thousands(point.y)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

