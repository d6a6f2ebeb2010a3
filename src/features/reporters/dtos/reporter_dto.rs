use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::reporters::models::Reporter;

/// Request DTO for registering a reporter
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateReporterDto {
    /// Supplied by clients that already hold an identity; generated otherwise
    pub reporter_id: Option<String>,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

/// Response DTO for a reporter
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReporterResponseDto {
    pub reporter_id: String,
    pub name: String,
}

impl From<Reporter> for ReporterResponseDto {
    fn from(r: Reporter) -> Self {
        Self {
            reporter_id: r.reporter_id,
            name: r.name,
        }
    }
}
