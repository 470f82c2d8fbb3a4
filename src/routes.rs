//! Route table and the dump handler.
//!
//! The route table is built explicitly by [`router`] at startup rather than
//! through any global registration, so the server lifecycle can be tested in
//! isolation with an arbitrary router.

use axum::{
    body::Bytes,
    extract::{Request, State},
    http::StatusCode,
    routing::any,
    Router,
};
use dump_core::{DumpRequest, DumpService};
use std::sync::Arc;

/// Application state shared across request handlers
///
/// Holds the `DumpService` instance used to persist payloads.
#[derive(Clone)]
pub struct AppState {
    pub dump_service: Arc<DumpService>,
}

/// Build the route table.
///
/// `/dump` is registered for every method; POST is expected but not
/// enforced, and any method reaching the route is processed identically.
pub fn router(state: AppState) -> Router {
    Router::new().route("/dump", any(dump)).with_state(state)
}

/// Persist one request body to a title-named file
///
/// Reads the entire body, extracts the `title` field, and writes the raw
/// bytes to `<title>.json`. Deliberately permissive: a body that fails to
/// read is treated as empty, and a body that fails to parse still gets
/// dumped under the default (empty) title. The response is 200 either way.
///
/// A file-write failure is not recoverable here and terminates the whole
/// process with a non-zero exit. This conflates one bad request with total
/// service failure; see DESIGN.md before changing it to per-request
/// recovery.
async fn dump(State(state): State<AppState>, request: Request) -> StatusCode {
    let body = match axum::body::to_bytes(request.into_body(), usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("Read request body error: {:?}", e);
            Bytes::new()
        }
    };

    let title = match serde_json::from_slice::<DumpRequest>(&body) {
        Ok(req) => req.title,
        Err(e) => {
            tracing::error!("Parse dump payload error: {:?}", e);
            String::new()
        }
    };

    tracing::info!("dump received: title={:?}", title);

    match state.dump_service.dump(&title, &body) {
        Ok(path) => {
            tracing::debug!("dump written: {}", path.display());
            StatusCode::OK
        }
        Err(e) => {
            tracing::error!("Persist dump error: {:?}", e);
            std::process::exit(1);
        }
    }
}
