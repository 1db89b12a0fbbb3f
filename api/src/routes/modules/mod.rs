//! # Modules Routes Module
//!
//! Defines and wires up routes for the `/api/modules` endpoint group.
//!
//! ## Structure
//! - `get.rs`: list and single-module reads
//! - `post.rs`: create
//! - `put.rs`: edit quantity and preview
//! - `delete.rs`: hard delete
//! - `common.rs`: response shapes and request parsing shared by the handlers

use axum::{
    Router,
    routing::{get, post},
};
use delete::{delete_module, delete_module_by_path};
use get::{get_module, list_modules};
use post::create_module;
use put::{edit_module, update_module};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds and returns the `/modules` route group.
///
/// Routes:
/// - `GET    /modules`              → list modules, optionally filtered
/// - `POST   /modules`              → create a module (multipart)
/// - `POST   /modules/update`       → edit a module named by `moduleId` (multipart)
/// - `POST   /modules/delete`       → delete a module named by `moduleId` (JSON)
/// - `GET    /modules/{module_id}`  → get a single module
/// - `PUT    /modules/{module_id}`  → edit a module (multipart)
/// - `DELETE /modules/{module_id}`  → delete a module
///
/// The `POST .../update` and `POST .../delete` forms serve clients that can
/// only submit HTML forms.
pub fn modules_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_modules).post(create_module))
        .route("/update", post(update_module))
        .route("/delete", post(delete_module))
        .route(
            "/{module_id}",
            get(get_module).put(edit_module).delete(delete_module_by_path),
        )
}
