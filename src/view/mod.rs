//! Rendering-agnostic dashboard model.
//!
//! Holds what the dashboard displays (counters, map markers, ranked table,
//! chart) as plain data, updated by applying fetch results. Any front end
//! (web, TUI, JSON API) can render from it.

pub mod dashboard;
pub mod state;
pub mod widgets;

pub use dashboard::Dashboard;
pub use state::{FetchKind, Generations, MapView, Ticket, ViewState};
pub use widgets::{
    ChartSeries, InfoBox, MapMarker, MarkerPopup, MetricStyle, RegionOption, TableRow,
};

use serde::Serialize;

// ---------------------------------------------------------------------------
// Panel — Load state of one widget's data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum Panel<T> {
    Loading,
    Ready(T),
    /// The fetch or transform failed; the message is for display.
    Unavailable(String),
}

impl<T> Default for Panel<T> {
    fn default() -> Self {
        Panel::Loading
    }
}

impl<T> Panel<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Panel::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Panel::Ready(_))
    }

    pub fn as_ref(&self) -> Panel<&T> {
        match self {
            Panel::Loading => Panel::Loading,
            Panel::Ready(value) => Panel::Ready(value),
            Panel::Unavailable(message) => Panel::Unavailable(message.clone()),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Panel<U> {
        match self {
            Panel::Loading => Panel::Loading,
            Panel::Ready(value) => Panel::Ready(f(value)),
            Panel::Unavailable(message) => Panel::Unavailable(message),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for Panel<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Panel::Ready(value),
            Err(e) => Panel::Unavailable(e.to_string()),
        }
    }
}
