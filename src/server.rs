//! Axum HTTP facade over the view controller.
//!
//! One route per controller operation plus snapshot and health. Mutating
//! routes respond with the new [`RenderState`] and the effect list so a
//! thin client can apply the scroll/URL effects itself.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/state` | Current render snapshot |
//! | POST | `/open` | Model a page load (optional `query` string) |
//! | POST | `/toggle` | Flip one answer by question id |
//! | POST | `/submit` | Commit the score |
//! | POST | `/reset` | Restore defaults |
//! | POST | `/restart` | Restore defaults and scroll to top |
//! | POST | `/copy` | Copy the share link to the configured clipboard |

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};

use crate::controller::{Clipboard, Controller, Effect};

/// Shared server state: the single-writer controller behind a lock, plus
/// an optional clipboard capability.
#[derive(Clone)]
pub struct AppState {
    controller: Arc<Mutex<Controller>>,
    clipboard: Option<Arc<dyn Clipboard + Send + Sync>>,
}

impl AppState {
    pub fn new(
        controller: Controller,
        clipboard: Option<Arc<dyn Clipboard + Send + Sync>>,
    ) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
            clipboard,
        }
    }
}

/// In-process clipboard: keeps the last written text. Stands in for the
/// platform clipboard so `/copy` is exercisable headlessly.
#[derive(Default)]
pub struct MemoryClipboard {
    last: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn last(&self) -> Option<String> {
        self.last.lock().unwrap().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write(&self, text: &str) -> bool {
        *self.last.lock().unwrap() = Some(text.to_string());
        true
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health_check))
        .route("/state", get(handle_get_state))
        .route("/open", post(handle_open))
        .route("/toggle", post(handle_toggle))
        .route("/submit", post(handle_submit))
        .route("/reset", post(handle_reset))
        .route("/restart", post(handle_restart))
        .route("/copy", post(handle_copy))
        .layer(cors)
        .with_state(state)
}

// ── Request types ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct OpenRequest {
    #[serde(default)]
    query: Option<String>,
}

#[derive(Deserialize)]
struct ToggleRequest {
    id: u32,
}

fn transition_response(
    controller: &Controller,
    effects: Vec<Effect>,
) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "state": controller.snapshot(),
        "effects": effects,
    }))
}

// ── Handlers ────────────────────────────────────────────────────────

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn handle_get_state(State(state): State<AppState>) -> Json<serde_json::Value> {
    let controller = state.controller.lock().unwrap();
    Json(serde_json::json!({ "state": controller.snapshot() }))
}

async fn handle_open(
    State(state): State<AppState>,
    Json(req): Json<OpenRequest>,
) -> Json<serde_json::Value> {
    let mut controller = state.controller.lock().unwrap();
    controller.open(req.query.as_deref());
    tracing::debug!(shared_view = controller.shared_view(), "page opened");
    transition_response(&controller, Vec::new())
}

async fn handle_toggle(
    State(state): State<AppState>,
    Json(req): Json<ToggleRequest>,
) -> Json<serde_json::Value> {
    let mut controller = state.controller.lock().unwrap();
    let effects = controller.toggle(req.id);
    transition_response(&controller, effects)
}

async fn handle_submit(State(state): State<AppState>) -> Json<serde_json::Value> {
    let mut controller = state.controller.lock().unwrap();
    let effects = controller.submit();
    tracing::debug!(score = controller.score(), "score committed");
    transition_response(&controller, effects)
}

async fn handle_reset(State(state): State<AppState>) -> Json<serde_json::Value> {
    let mut controller = state.controller.lock().unwrap();
    let effects = controller.reset();
    transition_response(&controller, effects)
}

async fn handle_restart(State(state): State<AppState>) -> Json<serde_json::Value> {
    let mut controller = state.controller.lock().unwrap();
    let effects = controller.restart();
    transition_response(&controller, effects)
}

async fn handle_copy(State(state): State<AppState>) -> Json<serde_json::Value> {
    let mut controller = state.controller.lock().unwrap();
    let clipboard = state.clipboard.as_deref().map(|c| c as &dyn Clipboard);
    let effects = controller.copy_link(clipboard);
    schedule_status_clears(&state, &effects);
    transition_response(&controller, effects)
}

/// Drive `ScheduleStatusClear` effects with a detached sleep, mirroring
/// the original's uncancelled `setTimeout`: a newer copy does not cancel a
/// pending clear, and overlapping clears are idempotent.
fn schedule_status_clears(state: &AppState, effects: &[Effect]) {
    for effect in effects {
        if let Effect::ScheduleStatusClear { delay_ms } = effect {
            let controller = Arc::clone(&state.controller);
            let delay = Duration::from_millis(*delay_ms);
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                controller.lock().unwrap().clear_copy_status();
            });
        }
    }
}
