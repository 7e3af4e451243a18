//! Webhook HTTP server.

use crate::config::{self, Config};
use crate::line::{self, Event, LineClient, MessageContent};
use crate::reply::build_reply;
use crate::travel::{SearchOutcome, TravelClient};
use anyhow::{Context, Result};
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

/// Shared state for the webhook handlers: config plus the API clients,
/// built once at startup and threaded through the router.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Channel secret resolved at startup; webhook bodies are verified against it.
    pub channel_secret: String,
    pub line: Arc<LineClient>,
    pub travel: Arc<TravelClient>,
}

/// Run the webhook server; binds to config.gateway.bind:port.
/// Fails fast when a credential is missing. Blocks until shutdown
/// (Ctrl+C or SIGTERM).
pub async fn run_server(config: Config) -> Result<()> {
    let channel_secret = config::resolve_channel_secret(&config).context(
        "LINE channel secret not configured (set LINE_CHANNEL_SECRET or line.channelSecret)",
    )?;
    let channel_token = config::resolve_channel_token(&config).context(
        "LINE channel token not configured (set LINE_CHANNEL_TOKEN or line.channelToken)",
    )?;
    let application_id = config::resolve_application_id(&config).context(
        "Rakuten application id not configured (set RAKUTEN_APP_ID or travel.applicationId)",
    )?;

    let line = LineClient::new(channel_token, config.line.api_base.clone());
    let travel = TravelClient::new(
        application_id,
        Duration::from_secs(config.travel.timeout_secs),
        config.travel.api_base.clone(),
    )?;

    let bind_addr = format!("{}:{}", config.gateway.bind.trim(), config.gateway.port);
    let state = AppState {
        config: Arc::new(config),
        channel_secret,
        line: Arc::new(line),
        travel: Arc::new(travel),
    };

    let app = Router::new()
        .route("/", get(health_http))
        .route("/callback", post(line_callback))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding to {}", bind_addr))?;
    log::info!("webhook gateway listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("webhook server exited")?;
    log::info!("webhook gateway stopped");
    Ok(())
}

/// Future that completes when the process should shut down (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    log::info!("shutdown signal received");
}

/// POST /callback — the LINE webhook. Verifies the signature over the
/// raw body, parses events, and handles text messages in order.
/// Per-event failures are logged and swallowed so LINE never retries a
/// half-processed batch; only an invalid signature or an unparseable
/// body is a 400.
async fn line_callback(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    let signature = headers
        .get("x-line-signature")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if !line::verify(&body, signature, &state.channel_secret) {
        log::warn!("webhook rejected: signature verification failed");
        return StatusCode::BAD_REQUEST;
    }

    let events = match line::parse_events(&body) {
        Ok(events) => events,
        Err(e) => {
            log::warn!("webhook rejected: malformed payload: {}", e);
            return StatusCode::BAD_REQUEST;
        }
    };

    for event in events {
        handle_event(&state, event).await;
    }
    StatusCode::OK
}

/// Handle one event: search with the message text, reply with the
/// result. Non-text and non-message events are skipped. An upstream
/// failure degrades to the no-results reply; a dispatch failure is
/// logged only, so the rest of the batch still runs.
async fn handle_event(state: &AppState, event: Event) {
    let Event::Message(message_event) = event else {
        return;
    };
    let MessageContent::Text { text } = message_event.message else {
        return;
    };

    let outcome = match state.travel.search(&text).await {
        Ok(outcome) => outcome,
        Err(e) => {
            log::warn!("travel search failed: {}", e);
            SearchOutcome::NoResults
        }
    };
    let message = build_reply(&outcome);
    if let Err(e) = state
        .line
        .reply(&message_event.reply_token, &[message])
        .await
    {
        log::warn!("reply dispatch failed: {}", e);
    }
}

/// GET / returns a simple health JSON (for probes).
async fn health_http(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "runtime": "running",
        "port": state.config.gateway.port,
    }))
}
