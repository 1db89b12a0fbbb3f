//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → Health check endpoint
//! - `/modules` → Module inventory CRUD

use crate::routes::{health::health_routes, modules::modules_routes};
use axum::{Router, extract::DefaultBodyLimit};
use util::{config, state::AppState};

pub mod health;
pub mod modules;

/// Builds the router for every HTTP endpoint, with `AppState` already applied.
///
/// Request bodies are capped at `MAX_UPLOAD_BYTES`, which bounds the size of
/// an uploaded preview image.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/modules", modules_routes())
        .layer(DefaultBodyLimit::max(config::max_upload_bytes()))
        .with_state(app_state)
}
