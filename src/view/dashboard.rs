//! Dashboard state machine: selector events in, widget data out.
//!
//! A front end drives it in two steps per fetch: `begin_*` issues a
//! [`Ticket`] before the request goes out, and `apply_*` hands the result
//! back with that ticket. A result whose ticket has been superseded by a
//! later `begin_*` of the same kind is dropped, so rapid selector changes
//! never leave an older response on screen.

use tracing::{debug, warn};

use super::state::{FetchKind, Generations, Ticket, ViewState};
use super::widgets::{self, ChartSeries, InfoBox, MapMarker, RegionOption, TableRow};
use super::Panel;
use crate::error::Result;
use crate::models::{
    DeltaPoint, Metric, RegionSnapshot, Selection, SelectionSummary, Summary, Timeline,
};
use crate::transform::{build_series, rank};

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    state: ViewState,
    generations: Generations,
    summary: Panel<Summary>,
    regions: Panel<Vec<RegionSnapshot>>,
    ranked: Panel<Vec<RegionSnapshot>>,
    chart: Panel<ChartSeries>,
}

impl Dashboard {
    /// A dashboard showing the worldwide selection and the cases metric,
    /// with every panel loading.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn summary(&self) -> &Panel<Summary> {
        &self.summary
    }

    /// Region snapshots in API order (map data).
    pub fn regions(&self) -> &Panel<Vec<RegionSnapshot>> {
        &self.regions
    }

    /// Region snapshots ranked by cases (table data).
    pub fn ranked(&self) -> &Panel<Vec<RegionSnapshot>> {
        &self.ranked
    }

    fn ticket(&mut self, kind: FetchKind, selection: Selection) -> Ticket {
        Ticket {
            kind,
            generation: self.generations.issue(kind),
            selection,
            metric: self.state.metric,
        }
    }

    fn accept(&self, ticket: &Ticket, kind: FetchKind) -> bool {
        if ticket.kind != kind || !self.generations.is_current(ticket) {
            debug!(
                "Dropping stale {:?} response (generation {}, latest {})",
                ticket.kind,
                ticket.generation,
                self.generations.latest(ticket.kind)
            );
            return false;
        }
        true
    }

    // -- Summary (initial load and region-selector changes) ----------------

    /// Start fetching counters for `selection`.
    pub fn begin_summary(&mut self, selection: Selection) -> Ticket {
        self.ticket(FetchKind::Summary, selection)
    }

    /// Apply a summary response. Returns `false` if the ticket is stale.
    ///
    /// On success the summary is replaced wholesale and the view moves to
    /// the ticket's selection, recentering the map. On failure the summary
    /// becomes unavailable and the previous selection stays.
    pub fn apply_summary(&mut self, ticket: &Ticket, result: Result<SelectionSummary>) -> bool {
        if !self.accept(ticket, FetchKind::Summary) {
            return false;
        }
        match result {
            Ok(fetched) => {
                self.state = self.state.with_selection(ticket.selection.clone(), &fetched);
                self.summary = Panel::Ready(fetched.summary);
            }
            Err(e) => {
                warn!("Summary for {} unavailable: {}", ticket.selection, e);
                self.summary = Panel::Unavailable(e.to_string());
            }
        }
        true
    }

    // -- Region list -------------------------------------------------------

    pub fn begin_countries(&mut self) -> Ticket {
        self.ticket(FetchKind::Countries, Selection::Worldwide)
    }

    /// Apply a region-list response. Fills the map data and the ranked table.
    pub fn apply_countries(
        &mut self,
        ticket: &Ticket,
        result: Result<Vec<RegionSnapshot>>,
    ) -> bool {
        if !self.accept(ticket, FetchKind::Countries) {
            return false;
        }
        match result {
            Ok(regions) => {
                self.ranked = Panel::Ready(rank(&regions));
                self.regions = Panel::Ready(regions);
            }
            Err(e) => {
                warn!("Region list unavailable: {}", e);
                self.ranked = Panel::Unavailable(e.to_string());
                self.regions = Panel::Unavailable(e.to_string());
            }
        }
        true
    }

    // -- Chart (mount and metric-selector changes) -------------------------

    /// Switch the active metric. Returns the ticket for the history refetch
    /// the change triggers.
    pub fn select_metric(&mut self, metric: Metric) -> Ticket {
        self.state = self.state.with_metric(metric);
        self.begin_history()
    }

    /// Start fetching the history for the active metric.
    pub fn begin_history(&mut self) -> Ticket {
        self.ticket(FetchKind::History, Selection::Worldwide)
    }

    /// Apply a history response, building daily deltas for the metric the
    /// ticket was issued with.
    pub fn apply_history(&mut self, ticket: &Ticket, result: Result<Timeline>) -> bool {
        if !self.accept(ticket, FetchKind::History) {
            return false;
        }
        let points: Result<Vec<DeltaPoint>> =
            result.and_then(|timeline| build_series(&timeline, ticket.metric));
        if let Err(e) = &points {
            warn!("Chart for {} unavailable: {}", ticket.metric, e);
        }
        self.chart = Panel::from(points).map(|points| ChartSeries::new(ticket.metric, points));
        true
    }

    // -- Render data -------------------------------------------------------

    pub fn info_boxes(&self) -> Vec<InfoBox> {
        widgets::info_boxes(self.summary.ready(), self.state.metric)
    }

    /// Markers for the active metric; empty until the region list loads.
    pub fn map_markers(&self) -> Vec<MapMarker> {
        self.regions
            .ready()
            .map(|regions| widgets::map_markers(regions, self.state.metric))
            .unwrap_or_default()
    }

    pub fn table_rows(&self) -> Panel<Vec<TableRow>> {
        self.ranked.as_ref().map(|ranked| widgets::table_rows(ranked))
    }

    pub fn region_options(&self) -> Vec<RegionOption> {
        let regions = self.regions.ready().map(Vec::as_slice).unwrap_or_default();
        widgets::region_options(regions)
    }

    pub fn chart(&self) -> &Panel<ChartSeries> {
        &self.chart
    }
}
