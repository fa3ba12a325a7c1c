//! Async wrapper around [`CovmapClient`] for use in async runtimes (Tokio, etc.).
//!
//! Runs every request on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//!
//! # Example
//!
//! ```no_run
//! use covmap::{AsyncCovmapClient, Selection};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AsyncCovmapClient::builder().build().await.unwrap();
//!
//!     let world = client.summary(Selection::Worldwide).await.unwrap();
//!
//!     // Or run any sync client method via closure
//!     let regions = client.run(|c| c.countries()).await.unwrap();
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::error::{CovmapError, Result};
use crate::models::{RegionSnapshot, Selection, SelectionSummary, Summary, Timeline};
use crate::CovmapClient;

// ---------------------------------------------------------------------------
// AsyncCovmapClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncCovmapClient`].
#[derive(Default)]
pub struct AsyncCovmapClientBuilder {
    inner: crate::CovmapClientBuilder,
}

impl AsyncCovmapClientBuilder {
    /// Set the API base URL.
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.inner = self.inner.api_base(base);
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Set how many days of history to request.
    pub fn history_days(mut self, days: u32) -> Self {
        self.inner = self.inner.history_days(days);
        self
    }

    /// Honour proxy settings from the environment.
    pub fn system_proxy(mut self, enabled: bool) -> Self {
        self.inner = self.inner.system_proxy(enabled);
        self
    }

    /// Build the async client.
    ///
    /// The blocking `reqwest` client is constructed on the blocking thread
    /// pool, since it must not be created inside an async context.
    pub async fn build(self) -> Result<AsyncCovmapClient> {
        let inner = self.inner;
        tokio::task::spawn_blocking(move || {
            let client = inner.build()?;
            Ok(AsyncCovmapClient {
                inner: Arc::new(client),
            })
        })
        .await
        .map_err(|e| CovmapError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncCovmapClient
// ---------------------------------------------------------------------------

/// Async wrapper around [`CovmapClient`].
///
/// The client holds no mutable state, so it is shared through an [`Arc`]
/// without locking and concurrent calls proceed independently.
#[derive(Clone)]
pub struct AsyncCovmapClient {
    inner: Arc<CovmapClient>,
}

impl AsyncCovmapClient {
    /// Create a new builder for configuring the async client.
    pub fn builder() -> AsyncCovmapClientBuilder {
        AsyncCovmapClientBuilder::default()
    }

    /// Run a sync client operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&CovmapClient) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&client))
            .await
            .map_err(|e| CovmapError::InvalidArgument(format!("Task join error: {e}")))?
    }

    pub async fn world_summary(&self) -> Result<Summary> {
        self.run(|c| c.world_summary()).await
    }

    pub async fn countries(&self) -> Result<Vec<RegionSnapshot>> {
        self.run(|c| c.countries()).await
    }

    pub async fn country(&self, code: &str) -> Result<RegionSnapshot> {
        let code = code.to_string();
        self.run(move |c| c.country(&code)).await
    }

    pub async fn summary(&self, selection: Selection) -> Result<SelectionSummary> {
        self.run(move |c| c.summary(&selection)).await
    }

    pub async fn world_history(&self, days: u32) -> Result<Timeline> {
        self.run(move |c| c.world_history(days)).await
    }

    pub async fn region_history(&self, code: &str, days: u32) -> Result<Timeline> {
        let code = code.to_string();
        self.run(move |c| c.region_history(&code, days)).await
    }

    pub async fn history(&self, selection: Selection) -> Result<Timeline> {
        self.run(move |c| c.history(&selection)).await
    }

    /// Return the wrapped blocking client.
    pub fn blocking(&self) -> &CovmapClient {
        &self.inner
    }
}
