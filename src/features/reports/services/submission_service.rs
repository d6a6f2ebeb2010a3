use std::sync::Arc;

use chrono::Local;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::CreateReportDto;
use crate::features::reports::models::Report;
use crate::features::reports::services::ReportService;
use crate::modules::storage::{MediaCategory, MediaStore};
use crate::shared::constants::DEFAULT_REPORT_STATUS;

/// Orchestrates one report submission: validation, media decoding, and a
/// single atomic write to the report store.
pub struct SubmissionService {
    report_service: Arc<ReportService>,
    media_store: Arc<MediaStore>,
}

impl SubmissionService {
    pub fn new(report_service: Arc<ReportService>, media_store: Arc<MediaStore>) -> Self {
        Self {
            report_service,
            media_store,
        }
    }

    /// Validate a draft, decode its attachments, and persist the report.
    ///
    /// On any failure no report row survives. Media files written before a
    /// later failure stay on disk.
    pub async fn submit(&self, dto: CreateReportDto) -> Result<Report> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let (location_lat, location_lng) = match dto.location {
            Some(location) => (
                Some(location.lat.to_string()),
                Some(location.lng.to_string()),
            ),
            None => (None, None),
        };

        let mut report = Report {
            report_id: Uuid::new_v4().to_string(),
            reporter_id: dto.reporter_id,
            catalog_id: dto.catalog_id,
            subcategory: dto.subcategory,
            subject: dto.subject,
            description: dto.description,
            image_ref: None,
            video_ref: None,
            audio_ref: None,
            submission_date: dto
                .submission_date
                .unwrap_or_else(|| Local::now().date_naive()),
            location_lat,
            location_lng,
            status: DEFAULT_REPORT_STATUS.to_string(),
        };

        // Attachment kinds are decoded one after another within the call
        if let Some(payload) = dto.image.as_deref() {
            report.image_ref = Some(self.decode(payload, MediaCategory::Image).await?);
        }
        if let Some(payload) = dto.video.as_deref() {
            report.video_ref = Some(self.decode(payload, MediaCategory::Video).await?);
        }
        if let Some(payload) = dto.audio.as_deref() {
            report.audio_ref = Some(self.decode(payload, MediaCategory::Audio).await?);
        }

        self.report_service.create(&report).await
    }

    async fn decode(&self, payload: &str, category: MediaCategory) -> Result<String> {
        let path = self
            .media_store
            .decode_and_store(payload, category)
            .await
            .map_err(|e| AppError::Validation(format!("Failed to process media payload: {}", e)))?;

        Ok(path.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::dtos::LocationDto;
    use crate::shared::test_helpers::{test_draft, test_media_store, test_pool};
    use base64::prelude::*;

    async fn service() -> (tempfile::TempDir, Arc<ReportService>, SubmissionService) {
        let pool = test_pool().await;
        let report_service = Arc::new(ReportService::new(pool));
        let (dir, media_store) = test_media_store();
        let submission = SubmissionService::new(Arc::clone(&report_service), Arc::new(media_store));
        (dir, report_service, submission)
    }

    #[tokio::test]
    async fn test_submit_without_media_leaves_refs_null_and_status_pending() {
        let (_dir, report_service, submission) = service().await;

        let report = submission.submit(test_draft("u1")).await.unwrap();

        assert_eq!(report.status, "pending");
        assert_eq!(report.image_ref, None);
        assert_eq!(report.video_ref, None);
        assert_eq!(report.audio_ref, None);

        let stored = report_service.get_by_id(&report.report_id).await.unwrap();
        assert_eq!(stored, report);
    }

    #[tokio::test]
    async fn test_submit_with_image_writes_file_and_sets_reference() {
        let (_dir, _report_service, submission) = service().await;

        let bytes = b"fake image bytes";
        let mut draft = test_draft("u1");
        draft.image = Some(format!(
            "data:image/png;base64,{}",
            BASE64_STANDARD.encode(bytes)
        ));

        let report = submission.submit(draft).await.unwrap();

        let image_ref = report.image_ref.expect("image_ref should be set");
        assert!(image_ref.contains("images"));
        assert_eq!(std::fs::read(&image_ref).unwrap(), bytes);
    }

    #[tokio::test]
    async fn test_malformed_media_fails_whole_submission() {
        let (_dir, report_service, submission) = service().await;

        let mut draft = test_draft("u1");
        draft.image = Some("data:image/png;base64".to_string());

        let err = submission.submit(draft).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        // No partial record committed
        assert!(report_service.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_required_field_is_rejected() {
        let (_dir, report_service, submission) = service().await;

        let mut draft = test_draft("u1");
        draft.subject = String::new();

        let err = submission.submit(draft).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(report_service.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_location_is_stored_as_string_pair() {
        let (_dir, _report_service, submission) = service().await;

        let mut draft = test_draft("u1");
        draft.location = Some(LocationDto {
            lat: 19.4,
            lng: -99.1,
        });

        let report = submission.submit(draft).await.unwrap();
        assert_eq!(report.location_lat.as_deref(), Some("19.4"));
        assert_eq!(report.location_lng.as_deref(), Some("-99.1"));
    }

    #[tokio::test]
    async fn test_submission_date_defaults_to_today() {
        let (_dir, _report_service, submission) = service().await;

        let report = submission.submit(test_draft("u1")).await.unwrap();
        assert_eq!(report.submission_date, Local::now().date_naive());
    }
}
