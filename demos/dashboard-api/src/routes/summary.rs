use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use covmap::Selection;
use serde::Deserialize;
use serde_json::{json, Value};

use super::dashboard;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SummaryParams {
    pub region: Option<String>,
}

/// GET /api/summary?region=USA
///
/// Select a region (omit or pass `worldwide` for the aggregate) and return
/// the counters, info boxes, and the resulting view state.
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SummaryParams>,
) -> Result<Json<Value>, AppError> {
    let selection = Selection::parse(params.region.as_deref().unwrap_or_default());
    let ticket = dashboard(&state)?.begin_summary(selection.clone());

    let result = state.client.summary(selection).await;

    let mut dash = dashboard(&state)?;
    let applied = dash.apply_summary(&ticket, result);
    Ok(Json(json!({
        "applied": applied,
        "view": dash.state(),
        "summary": dash.summary(),
        "infoBoxes": dash.info_boxes(),
    })))
}
