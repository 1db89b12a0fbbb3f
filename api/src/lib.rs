pub mod middleware;
pub mod response;
pub mod routes;

use axum::{Router, middleware::from_fn};
use util::state::AppState;

/// Builds the full application: every route under `/api`, wrapped in request
/// logging and CORS.
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::routes(app_state))
        .layer(from_fn(middleware::log_request))
        .layer(middleware::cors_layer())
}
