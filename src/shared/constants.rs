/// Status assigned to a report when it is first submitted
pub const DEFAULT_REPORT_STATUS: &str = "pending";

/// URL path segment under which decoded media files are served
pub const UPLOADS_PATH_SEGMENT: &str = "uploads";
