use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use covmap::{Metric, Selection};
use serde::Deserialize;
use serde_json::{json, Value};

use super::dashboard;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChartParams {
    pub metric: Option<String>,
}

/// GET /api/chart?metric=deaths
///
/// Switch the active metric (if given), refetch the worldwide history, and
/// return the chart of daily deltas.
pub async fn get_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChartParams>,
) -> Result<Json<Value>, AppError> {
    let metric = params
        .metric
        .as_deref()
        .map(str::parse::<Metric>)
        .transpose()?;

    let ticket = {
        let mut dash = dashboard(&state)?;
        match metric {
            Some(metric) => dash.select_metric(metric),
            None => dash.begin_history(),
        }
    };

    let result = state.client.history(Selection::Worldwide).await;

    let mut dash = dashboard(&state)?;
    let applied = dash.apply_history(&ticket, result);
    Ok(Json(json!({
        "applied": applied,
        "metric": dash.state().metric,
        "chart": dash.chart(),
    })))
}
