//! HTTP surface of the stream service. Everything is mounted under `/api`.

mod health;
mod messages;
mod stream;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use chrono::Utc;
use gravity_core::engine::{DraftRotation, PageLimits};
use gravity_core::{InMemoryRepository, StreamRepository};
use parking_lot::Mutex;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::ServerConfig;

/// Shared server state
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn StreamRepository>,
    pub drafts: Arc<Mutex<DraftRotation>>,
    pub limits: PageLimits,
}

impl AppState {
    pub fn new(repo: Arc<dyn StreamRepository>, drafts: DraftRotation, limits: PageLimits) -> Self {
        Self {
            repo,
            drafts: Arc::new(Mutex::new(drafts)),
            limits,
        }
    }

    /// State over a freshly seeded mock stream
    pub fn from_config(config: &ServerConfig) -> Self {
        let drafts = match config.draft_seed {
            Some(seed) => DraftRotation::new(seed),
            None => DraftRotation::from_entropy(),
        };
        let repo = InMemoryRepository::with_mock_data(Utc::now());
        tracing::info!(items = repo.len(), "Seeded mock stream");
        Self::new(Arc::new(repo), drafts, config.page_limits())
    }
}

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/stream", get(stream::list_stream))
        .route("/stream/:id", get(stream::get_item))
        .route(
            "/stream/:id/read",
            post(stream::mark_read).patch(stream::mark_read),
        )
        .route("/messages/:item_id", post(messages::send_message))
        .route("/messages/:item_id/draft", post(messages::refine_draft))
        .route(
            "/messages/:item_id/draft/regenerate",
            post(messages::regenerate_draft),
        )
        .route("/health", get(health::health));

    // One INFO line per request with method, uri, status and latency
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .nest("/api", api)
        .layer(trace)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let state = AppState::from_config(&config);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "Gravity API listening on http://{}/api", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    pub const TEST_SEED: u64 = 7;

    pub fn test_state() -> AppState {
        AppState::new(
            Arc::new(InMemoryRepository::with_mock_data(Utc::now())),
            DraftRotation::new(TEST_SEED),
            PageLimits::default(),
        )
    }

    /// Send one request through the router and decode the JSON reply
    pub async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }
}
