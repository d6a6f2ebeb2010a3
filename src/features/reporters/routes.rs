use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::reporters::handlers;
use crate::features::reporters::services::ReporterService;

/// Create routes for the reporters feature
pub fn routes(service: Arc<ReporterService>) -> Router {
    Router::new()
        .route(
            "/reporters/",
            get(handlers::list_reporters).post(handlers::register_reporter),
        )
        .with_state(service)
}
