use std::sync::Mutex;

use covmap::Dashboard;

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// Async covmap client. Dispatches blocking requests to a thread pool
    /// internally.
    pub client: covmap::AsyncCovmapClient,

    /// The dashboard model. Locked only to issue a ticket or apply a result,
    /// never across an `.await`.
    pub dashboard: Mutex<Dashboard>,
}
