use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

use super::dashboard;
use crate::error::AppError;
use crate::state::AppState;

/// GET /api/regions
///
/// Refetch the region list; returns selector options and the ranked table.
pub async fn list_regions(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let ticket = dashboard(&state)?.begin_countries();

    let result = state.client.countries().await;

    let mut dash = dashboard(&state)?;
    let applied = dash.apply_countries(&ticket, result);
    let options = dash.region_options();
    let count = options.len().saturating_sub(1);
    Ok(Json(json!({
        "applied": applied,
        "options": options,
        "table": dash.table_rows(),
        "count": count,
    })))
}

/// GET /api/map
///
/// Markers for the active metric from the last loaded region list.
pub async fn get_map(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let dash = dashboard(&state)?;
    let markers = dash.map_markers();
    let count = markers.len();
    Ok(Json(json!({
        "view": dash.state().map,
        "metric": dash.state().metric,
        "markers": markers,
        "count": count,
    })))
}
