//! covmap: pandemic statistics client and dashboard model for Rust.
//!
//! Fetches worldwide and per-region counters, region lists, and cumulative
//! histories from the [disease.sh](https://disease.sh) REST API, then shapes
//! them for display: regions ranked by a metric, daily deltas for a chart,
//! and a rendering-agnostic dashboard model (counters, map markers, table).
//!
//! # Quick start
//!
//! ```no_run
//! use covmap::{CovmapClient, Metric};
//! use covmap::transform::{build_series, rank};
//!
//! let client = CovmapClient::builder().build().unwrap();
//!
//! // Regions by total cases, largest first
//! let table = rank(&client.countries().unwrap());
//!
//! // New deaths per day over the default 120-day window
//! let history = client.world_history(120).unwrap();
//! let points = build_series(&history, Metric::Deaths).unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod transform;
pub mod view;

#[cfg(feature = "async")]
pub use async_client::AsyncCovmapClient;
pub use client::ApiClient;
pub use error::{CovmapError, Result};
pub use models::{
    CumulativeSeries, DeltaPoint, LatLng, Metric, RegionSnapshot, Selection, SelectionSummary,
    Summary, Timeline,
};
pub use view::{Dashboard, ViewState};

use std::fmt;
use std::time::Duration;

use tracing::debug;

use models::RegionHistory;

// ---------------------------------------------------------------------------
// CovmapClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CovmapClient`].
///
/// Use [`CovmapClient::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CovmapClientBuilder::build).
pub struct CovmapClientBuilder {
    api_base: Option<String>,
    timeout: Duration,
    history_days: u32,
    system_proxy: bool,
}

impl Default for CovmapClientBuilder {
    fn default() -> Self {
        Self {
            api_base: None,
            timeout: config::DEFAULT_TIMEOUT,
            history_days: config::DEFAULT_HISTORY_DAYS,
            system_proxy: true,
        }
    }
}

impl CovmapClientBuilder {
    /// Set the API base URL.
    ///
    /// If not set, `COVMAP_API_BASE` from the environment is used, falling
    /// back to [`config::API_BASE`].
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set how many days of history [`CovmapClient::history`] requests.
    ///
    /// Defaults to 120.
    pub fn history_days(mut self, days: u32) -> Self {
        self.history_days = days;
        self
    }

    /// Honour proxy settings from the environment. Defaults to `true`.
    pub fn system_proxy(mut self, enabled: bool) -> Self {
        self.system_proxy = enabled;
        self
    }

    /// Build the client. No request is made until the first query.
    pub fn build(self) -> Result<CovmapClient> {
        if self.history_days == 0 {
            return Err(CovmapError::InvalidArgument(
                "history_days must be at least 1".into(),
            ));
        }
        let base = self.api_base.unwrap_or_else(config::api_base_from_env);
        let api = ApiClient::new(&base, self.timeout, self.system_proxy)?;
        Ok(CovmapClient {
            api,
            history_days: self.history_days,
        })
    }
}

// ---------------------------------------------------------------------------
// CovmapClient
// ---------------------------------------------------------------------------

/// The main entry point: one method per API resource the dashboard reads.
///
/// Each call issues exactly one blocking GET. Calls share no mutable state,
/// so a client can be cloned or shared across threads freely.
#[derive(Debug, Clone)]
pub struct CovmapClient {
    api: ApiClient,
    history_days: u32,
}

impl CovmapClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> CovmapClientBuilder {
        CovmapClientBuilder::default()
    }

    // -- Summaries ---------------------------------------------------------

    /// Worldwide aggregate counters (`/all`).
    pub fn world_summary(&self) -> Result<Summary> {
        self.api.get_json(config::all_path())
    }

    /// Every region's snapshot (`/countries`), in API order.
    pub fn countries(&self) -> Result<Vec<RegionSnapshot>> {
        let regions: Vec<RegionSnapshot> = self.api.get_json(config::countries_path())?;
        debug!("Loaded {} region snapshots", regions.len());
        Ok(regions)
    }

    /// One region's snapshot (`/countries/{code}`).
    ///
    /// `code` may be an ISO2/ISO3 code or a country name. Unknown regions
    /// return [`CovmapError::NotFound`].
    pub fn country(&self, code: &str) -> Result<RegionSnapshot> {
        let code = non_empty(code)?;
        self.api.get_json(&config::country_path(code))
    }

    /// Counters for a region-selector value, plus the coordinates to
    /// recenter the map on (none for worldwide).
    pub fn summary(&self, selection: &Selection) -> Result<SelectionSummary> {
        match selection {
            Selection::Worldwide => self.world_summary().map(SelectionSummary::from),
            Selection::Region(code) => self.country(code).map(SelectionSummary::from),
        }
    }

    // -- Histories ---------------------------------------------------------

    /// Worldwide cumulative series for the last `days` days.
    pub fn world_history(&self, days: u32) -> Result<Timeline> {
        self.api.get_json(&config::historical_all_path(days))
    }

    /// One region's cumulative series for the last `days` days.
    pub fn region_history(&self, code: &str, days: u32) -> Result<Timeline> {
        let code = non_empty(code)?;
        let history: RegionHistory = self.api.get_json(&config::historical_path(code, days))?;
        debug!(
            "Loaded history for {} (provinces: {:?})",
            history.country, history.province
        );
        Ok(history.timeline)
    }

    /// Cumulative series for a selection over the configured window.
    pub fn history(&self, selection: &Selection) -> Result<Timeline> {
        match selection {
            Selection::Worldwide => self.world_history(self.history_days),
            Selection::Region(code) => self.region_history(code, self.history_days),
        }
    }

    // -- Accessors ---------------------------------------------------------

    pub fn history_days(&self) -> u32 {
        self.history_days
    }

    /// Return the underlying [`ApiClient`] for raw requests.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }
}

fn non_empty(code: &str) -> Result<&str> {
    let code = code.trim();
    if code.is_empty() {
        return Err(CovmapError::InvalidArgument("region code is empty".into()));
    }
    Ok(code)
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for CovmapClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CovmapClient(api_base={}, history_days={})",
            self.api.base_url, self.history_days
        )
    }
}
