use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::reports::models::Report;
use crate::shared::constants::UPLOADS_PATH_SEGMENT;

/// Decimal coordinate pair, always carried as a whole
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationDto {
    pub lat: f64,
    pub lng: f64,
}

/// Request DTO for submitting a new incident report
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateReportDto {
    #[validate(length(min = 1, message = "reporter_id is required"))]
    pub reporter_id: String,
    #[validate(length(min = 1, message = "catalog_id is required"))]
    pub catalog_id: String,
    #[validate(length(min = 1, message = "subcategory is required"))]
    pub subcategory: String,
    #[validate(length(min = 1, message = "subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    /// Defaults to the date of processing when omitted
    pub submission_date: Option<NaiveDate>,
    /// Embedded media payloads in `data:<mime>;base64,<payload>` form
    pub image: Option<String>,
    pub video: Option<String>,
    pub audio: Option<String>,
    pub location: Option<LocationDto>,
}

/// Response DTO for a created report
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedReportDto {
    pub report_id: String,
}

/// Request DTO for updating the workflow status of a report
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateStatusDto {
    #[validate(length(min = 1, message = "status must not be empty"))]
    pub status: String,
}

/// Query parameters for listing reports
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
pub struct ListReportsQuery {
    /// Restrict the listing to reports filed by this reporter
    pub id_usuario: Option<String>,
}

/// Response DTO for a report, with media references rewritten to URLs
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportResponseDto {
    pub report_id: String,
    pub reporter_id: String,
    pub catalog_id: String,
    pub subcategory: String,
    pub subject: String,
    pub description: String,
    pub image: Option<String>,
    pub video: Option<String>,
    pub audio: Option<String>,
    pub submission_date: String,
    pub location: Option<LocationDto>,
    pub status: String,
}

impl ReportResponseDto {
    /// Build the client view of a report.
    ///
    /// Media references become absolute URLs under `{base_url}uploads/`;
    /// the location map is reconstructed only when both coordinates parse.
    pub fn from_report(r: Report, base_url: &str) -> Self {
        let location = match (&r.location_lat, &r.location_lng) {
            (Some(lat), Some(lng)) => match (lat.parse::<f64>(), lng.parse::<f64>()) {
                (Ok(lat), Ok(lng)) => Some(LocationDto { lat, lng }),
                _ => None,
            },
            _ => None,
        };

        Self {
            image: r.image_ref.as_deref().map(|p| media_url(base_url, p)),
            video: r.video_ref.as_deref().map(|p| media_url(base_url, p)),
            audio: r.audio_ref.as_deref().map(|p| media_url(base_url, p)),
            submission_date: r.submission_date.format("%Y-%m-%d").to_string(),
            location,
            report_id: r.report_id,
            reporter_id: r.reporter_id,
            catalog_id: r.catalog_id,
            subcategory: r.subcategory,
            subject: r.subject,
            description: r.description,
            status: r.status,
        }
    }
}

/// Join the request base address with the uploads segment and file base name
fn media_url(base_url: &str, file_path: &str) -> String {
    let base_name = Path::new(file_path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.to_string());
    format!("{}{}/{}", base_url, UPLOADS_PATH_SEGMENT, base_name)
}
