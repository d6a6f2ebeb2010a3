use std::sync::Arc;

use axum::{
    routing::{delete, get, patch},
    Router,
};

use crate::features::reports::handlers::{self, ReportState};
use crate::features::reports::services::{ReportService, SubmissionService};

/// Create routes for the reports feature
///
/// One list endpoint carries the optional reporter filter.
pub fn routes(
    submission_service: Arc<SubmissionService>,
    report_service: Arc<ReportService>,
) -> Router {
    let state = ReportState {
        submission_service,
        report_service,
    };

    Router::new()
        .route(
            "/incidencias/",
            get(handlers::list_reports).post(handlers::create_report),
        )
        .route(
            "/incidencias/{id}/estado",
            patch(handlers::update_report_status),
        )
        .route("/incidencias/{id}", delete(handlers::delete_report))
        .with_state(state)
}
