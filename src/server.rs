// src/server.rs
// Thin HTTP front end: a liveness route and a route that triggers one
// synchronous watch cycle. Concurrent /check hits are serialized by the
// mutex so two runs can never race on the snapshot file.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tracing::{error, info};

use crate::runner::Watcher;

type Shared = Arc<Mutex<Watcher>>;

pub fn router(watcher: Watcher) -> Router {
    let state: Shared = Arc::new(Mutex::new(watcher));
    Router::new()
        .route("/", get(index))
        .route("/check", get(check))
        .with_state(state)
}

/// Bind and serve until the process is killed.
pub async fn serve(watcher: Watcher, port: u16) -> std::io::Result<()> {
    let app = router(watcher);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn index() -> &'static str {
    "agenda_watch: vivo. GET /check dispara una revisión.\n"
}

async fn check(State(state): State<Shared>) -> (StatusCode, String) {
    // The pipeline is blocking (reqwest blocking + file IO), so it runs
    // off the async workers. The lock is the single-flight guard.
    let result = tokio::task::spawn_blocking(move || {
        let watcher = state.lock().unwrap_or_else(PoisonError::into_inner);
        watcher.run_once()
    })
    .await;

    match result {
        Ok(Ok(outcome)) => (StatusCode::OK, outcome.status_line()),
        Ok(Err(e)) => {
            error!("check run failed: {e}");
            (StatusCode::BAD_GATEWAY, format!("La revisión falló: {e}\n"))
        }
        Err(e) => {
            error!("check task panicked: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error interno.\n".into())
        }
    }
}
