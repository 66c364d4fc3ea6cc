use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use multibagger_core::domain::candidate::Candidate;
use multibagger_core::domain::input::AgentInput;
use multibagger_core::domain::response::AgentResponse;
use multibagger_core::engine::run_agent;
use multibagger_core::universe::Universe;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = multibagger_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let universe = match Universe::indian_listed() {
        Ok(universe) => Arc::new(universe),
        Err(e) => {
            sentry_anyhow::capture_anyhow(&e);
            tracing::error!(error = %e, "candidate universe failed to load");
            return Err(e);
        }
    };
    tracing::info!(universe_len = universe.len(), "candidate universe loaded");

    let state = AppState { universe };

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/universe", get(get_universe))
        .route("/agent/run", post(post_agent_run))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!(%addr, "api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn healthz() -> &'static str {
    "ok"
}

#[derive(Debug, Clone)]
struct AppState {
    universe: Arc<Universe>,
}

/// One agent run. The `run_id` exists for log/trace correlation only; the
/// response itself is a pure function of the request body.
#[derive(Debug, Serialize)]
struct ApiRun {
    run_id: Uuid,
    response: AgentResponse,
}

async fn get_universe(State(state): State<AppState>) -> Json<Vec<Candidate>> {
    Json(state.universe.candidates().to_vec())
}

async fn post_agent_run(
    State(state): State<AppState>,
    Json(input): Json<AgentInput>,
) -> Result<Json<ApiRun>, StatusCode> {
    let run_id = Uuid::new_v4();

    let response = run_agent(&state.universe, &input).map_err(|e| {
        // The engine only fails on caller contract violations.
        tracing::warn!(%run_id, error = %e, "rejected invalid agent input");
        StatusCode::UNPROCESSABLE_ENTITY
    })?;

    tracing::info!(
        %run_id,
        top_picks = response.top_picks.len(),
        portfolio_slots = response.portfolio_mix.len(),
        "agent run served"
    );

    Ok(Json(ApiRun { run_id, response }))
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn init_sentry(settings: &multibagger_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
