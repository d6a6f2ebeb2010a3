use chrono::NaiveDate;
use sqlx::FromRow;

/// Database model for an incident report
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Report {
    pub report_id: String,
    pub reporter_id: String,
    pub catalog_id: String,
    pub subcategory: String,
    pub subject: String,
    pub description: String,
    /// Filesystem paths of decoded media, null when not supplied
    pub image_ref: Option<String>,
    pub video_ref: Option<String>,
    pub audio_ref: Option<String>,
    pub submission_date: NaiveDate,
    /// Coordinates are stored as strings, both set or both null
    pub location_lat: Option<String>,
    pub location_lng: Option<String>,
    pub status: String,
}
