//! Blocking HTTP transport for the statistics API.
//!
//! Issues GET requests against the configured base URL and decodes JSON
//! bodies. There is no caching and no retry: every call is one request, and
//! a failure is returned to the caller as-is.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::error::{CovmapError, Result};

/// Thin wrapper over a `reqwest` blocking client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Base URL without a trailing slash, e.g. `https://disease.sh/v3/covid-19`.
    pub base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a client for `base_url`.
    ///
    /// `system_proxy` controls whether proxy settings from the environment
    /// are honoured.
    pub fn new(base_url: &str, timeout: Duration, system_proxy: bool) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10));
        if !system_proxy {
            builder = builder.no_proxy();
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    /// Full URL for an API-relative path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` and decode the body as `T`.
    ///
    /// A 404 becomes [`CovmapError::NotFound`]; any other non-2xx status or
    /// transport failure becomes [`CovmapError::Network`].
    pub fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let start = Instant::now();
        debug!("Fetching {}", url);

        let resp = self.client.get(&url).send()?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            warn!("Not found (404) - {}", url);
            return Err(CovmapError::NotFound(url));
        }

        let body = resp.error_for_status()?.text()?;
        let value = serde_json::from_str(&body)?;

        info!(
            "Fetch completed - url={}, status={}, bytes={}, duration={:.2}s",
            url,
            status.as_u16(),
            body.len(),
            start.elapsed().as_secs_f32()
        );
        Ok(value)
    }
}
