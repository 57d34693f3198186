use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use server_api::ApiContext;
use shared::{
    error::{ApiError, ErrorCode},
    protocol::{RoverCommandRequest, RoverCommandResponse, WelcomeResponse},
};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;

use app_state::AppState;
use config::{load_settings, LoadedSettings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let LoadedSettings { settings, warnings } = load_settings();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    for warning in &warnings {
        warn!(%warning, "settings file problem");
    }

    let state = AppState {
        api: ApiContext::new(settings.max_commands),
    };
    let app = build_router(Arc::new(state), settings.max_body_bytes);

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(
        %addr,
        max_commands = settings.max_commands,
        max_body_bytes = settings.max_body_bytes,
        "rover server listening"
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/healthz", get(healthz))
        .route("/rover/command", post(command_rover))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .with_state(state)
}

async fn read_root() -> Json<WelcomeResponse> {
    Json(server_api::welcome())
}

async fn healthz() -> &'static str {
    "ok"
}

async fn command_rover(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RoverCommandRequest>,
) -> Result<Json<RoverCommandResponse>, (StatusCode, Json<ApiError>)> {
    server_api::command_rover(&state.api, req)
        .map(Json)
        .map_err(|e| {
            warn!(code = ?e.code, message = %e.message, "rover command rejected");
            (status_for(e.code), Json(e))
        })
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::Validation => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::InvalidConfiguration => StatusCode::BAD_REQUEST,
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
