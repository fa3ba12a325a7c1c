pub mod chart;
pub mod regions;
pub mod summary;

use std::sync::MutexGuard;

use covmap::Dashboard;

use crate::error::AppError;
use crate::state::AppState;

/// Lock the dashboard model. Callers must drop the guard before awaiting.
pub fn dashboard(state: &AppState) -> Result<MutexGuard<'_, Dashboard>, AppError> {
    state
        .dashboard
        .lock()
        .map_err(|_| AppError::internal("Dashboard lock poisoned"))
}
