use utoipa::{Modify, OpenApi};

use crate::features::reporters::{dtos as reporters_dtos, handlers as reporters_handlers};
use crate::features::reports::{dtos as reports_dtos, handlers as reports_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Incidencias
        reports_handlers::report_handler::create_report,
        reports_handlers::report_handler::list_reports,
        reports_handlers::report_handler::update_report_status,
        reports_handlers::report_handler::delete_report,
        // Reporters
        reporters_handlers::reporter_handler::register_reporter,
        reporters_handlers::reporter_handler::list_reporters,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Incidencias
            reports_dtos::LocationDto,
            reports_dtos::CreateReportDto,
            reports_dtos::CreatedReportDto,
            reports_dtos::UpdateStatusDto,
            reports_dtos::ReportResponseDto,
            ApiResponse<reports_dtos::CreatedReportDto>,
            ApiResponse<Vec<reports_dtos::ReportResponseDto>>,
            // Reporters
            reporters_dtos::CreateReporterDto,
            reporters_dtos::ReporterResponseDto,
            ApiResponse<reporters_dtos::ReporterResponseDto>,
            ApiResponse<Vec<reporters_dtos::ReporterResponseDto>>,
        )
    ),
    tags(
        (name = "incidencias", description = "Incident report submission and administration"),
        (name = "reporters", description = "Reporter registration (public)"),
    ),
    info(
        title = "Incidencia API",
        version = "0.1.0",
        description = "Incident reporting backend",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
