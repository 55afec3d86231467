//! HTTP transport - maps HTTP requests to command dispatch.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `POST /:command` - dispatch a command. Body = JSON input.
//! - `GET /health` - health check returning `{ "ok": true, "commands": [...] }`.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use super::service::Service;

/// Build an axum `Router` that dispatches commands via the given service.
pub fn router<R: Send + Sync + 'static>(service: Arc<Service<R>>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/:command", post(command_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Serve the service over HTTP at the given address (e.g. `"127.0.0.1:8080"`).
pub async fn serve<R: Send + Sync + 'static>(
    service: Arc<Service<R>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "book catalogue listening");
    axum::serve(listener, app).await
}

/// `GET /health` - returns `{ "ok": true, "commands": [...] }`.
async fn health_handler<R: Send + Sync + 'static>(
    State(service): State<Arc<Service<R>>>,
) -> impl IntoResponse {
    let mut commands: Vec<&str> = service.commands();
    commands.sort_unstable();
    Json(json!({ "ok": true, "commands": commands }))
}

/// `POST /:command` - dispatch a command with the JSON body as input.
async fn command_handler<R: Send + Sync + 'static>(
    State(service): State<Arc<Service<R>>>,
    Path(command): Path<String>,
    Json(input): Json<Value>,
) -> impl IntoResponse {
    match service.dispatch(&command, input) {
        Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        Err(e) => {
            let status =
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let body = json!({ "error": e.to_string() });
            (status, Json(body)).into_response()
        }
    }
}
