mod error;
mod routes;
mod state;

use std::sync::{Arc, Mutex};

use axum::routing::get;
use axum::Router;
use covmap::{Dashboard, Selection};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use state::AppState;

/// Initial loads: worldwide counters, the region list, and the chart.
async fn warm_up(state: &AppState) {
    let (summary, countries, history) = {
        let Ok(mut dash) = state.dashboard.lock() else {
            return;
        };
        (
            dash.begin_summary(Selection::Worldwide),
            dash.begin_countries(),
            dash.begin_history(),
        )
    };

    let (s, c, h) = tokio::join!(
        state.client.summary(Selection::Worldwide),
        state.client.countries(),
        state.client.history(Selection::Worldwide),
    );

    if let Ok(mut dash) = state.dashboard.lock() {
        dash.apply_summary(&summary, s);
        dash.apply_countries(&countries, c);
        dash.apply_history(&history, h);
        if !dash.summary().is_ready() {
            warn!("Worldwide summary unavailable at startup");
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Initializing covmap client...");
    let client = covmap::AsyncCovmapClient::builder().build().await?;
    info!("Client ready: {}", client.blocking());

    let state = Arc::new(AppState {
        client,
        dashboard: Mutex::new(Dashboard::new()),
    });
    warm_up(&state).await;

    let app = Router::new()
        .route("/api/summary", get(routes::summary::get_summary))
        .route("/api/regions", get(routes::regions::list_regions))
        .route("/api/map", get(routes::regions::get_map))
        .route("/api/chart", get(routes::chart::get_chart))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = std::env::var("COVMAP_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    info!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
