//! Explicit view state and fetch generations.
//!
//! The selected region, active metric, and map viewport live in one
//! immutable [`ViewState`] that only changes through selector transitions.
//! Each fetch category carries a generation counter so that a response is
//! applied only if no newer request of the same kind has been issued.

use serde::Serialize;

use crate::config;
use crate::models::{LatLng, Metric, Selection, SelectionSummary};

// ---------------------------------------------------------------------------
// MapView
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
}

impl MapView {
    pub fn world() -> Self {
        Self {
            center: LatLng::from(config::WORLD_CENTER),
            zoom: config::WORLD_ZOOM,
        }
    }

    pub fn region(center: LatLng) -> Self {
        Self {
            center,
            zoom: config::REGION_ZOOM,
        }
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::world()
    }
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewState {
    pub selection: Selection,
    pub metric: Metric,
    pub map: MapView,
}

impl ViewState {
    /// State after a region-selector change has been fetched.
    ///
    /// A region recenters the map to its coordinates at region zoom;
    /// worldwide (or a region the API gave no coordinates for) resets to the
    /// world view.
    pub fn with_selection(&self, selection: Selection, fetched: &SelectionSummary) -> ViewState {
        let map = match (&selection, fetched.coordinates) {
            (Selection::Region(_), Some(center)) => MapView::region(center),
            _ => MapView::world(),
        };
        ViewState {
            selection,
            metric: self.metric,
            map,
        }
    }

    /// State after a metric-selector change.
    pub fn with_metric(&self, metric: Metric) -> ViewState {
        ViewState {
            metric,
            ..self.clone()
        }
    }
}

// ---------------------------------------------------------------------------
// Fetch generations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchKind {
    Summary,
    Countries,
    History,
}

/// Handle for one in-flight fetch. Carries the parameters the request was
/// issued with, so the response is interpreted against them rather than
/// against whatever the view state has become since.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub kind: FetchKind,
    pub generation: u64,
    pub selection: Selection,
    pub metric: Metric,
}

#[derive(Debug, Clone, Default)]
pub struct Generations {
    summary: u64,
    countries: u64,
    history: u64,
}

impl Generations {
    fn slot(&mut self, kind: FetchKind) -> &mut u64 {
        match kind {
            FetchKind::Summary => &mut self.summary,
            FetchKind::Countries => &mut self.countries,
            FetchKind::History => &mut self.history,
        }
    }

    /// Issue the next generation for `kind`, superseding earlier ones.
    pub fn issue(&mut self, kind: FetchKind) -> u64 {
        let slot = self.slot(kind);
        *slot += 1;
        *slot
    }

    pub fn latest(&self, kind: FetchKind) -> u64 {
        match kind {
            FetchKind::Summary => self.summary,
            FetchKind::Countries => self.countries,
            FetchKind::History => self.history,
        }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        ticket.generation == self.latest(ticket.kind)
    }
}
