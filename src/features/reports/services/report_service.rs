use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::Report;

const REPORT_COLUMNS: &str = "report_id, reporter_id, catalog_id, subcategory, subject, \
     description, image_ref, video_ref, audio_ref, submission_date, \
     location_lat, location_lng, status";

/// Relational store for incident reports, keyed by `report_id`
pub struct ReportService {
    pool: SqlitePool,
}

impl ReportService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert one report row in its own transaction.
    ///
    /// A storage failure rolls the transaction back explicitly and surfaces
    /// as a client error, matching the submission contract.
    pub async fn create(&self, report: &Report) -> Result<Report> {
        let mut tx = self.pool.begin().await?;

        let insert = sqlx::query(
            r#"
            INSERT INTO reports (
                report_id, reporter_id, catalog_id, subcategory, subject, description,
                image_ref, video_ref, audio_ref, submission_date,
                location_lat, location_lng, status
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
            "#,
        )
        .bind(&report.report_id)
        .bind(&report.reporter_id)
        .bind(&report.catalog_id)
        .bind(&report.subcategory)
        .bind(&report.subject)
        .bind(&report.description)
        .bind(&report.image_ref)
        .bind(&report.video_ref)
        .bind(&report.audio_ref)
        .bind(report.submission_date)
        .bind(&report.location_lat)
        .bind(&report.location_lng)
        .bind(&report.status)
        .execute(&mut *tx)
        .await;

        if let Err(e) = insert {
            tracing::error!("Failed to create report: {:?}", e);
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!("Failed to roll back report creation: {:?}", rollback_err);
            }
            return Err(AppError::BadRequest(e.to_string()));
        }

        tx.commit().await?;

        tracing::info!(
            "Created report: {} for reporter: {}",
            report.report_id,
            report.reporter_id
        );

        Ok(report.clone())
    }

    /// List all reports, optionally restricted to a single reporter
    pub async fn list(&self, reporter_id: Option<&str>) -> Result<Vec<Report>> {
        let reports = match reporter_id {
            Some(reporter_id) => {
                sqlx::query_as::<_, Report>(&format!(
                    "SELECT {} FROM reports WHERE reporter_id = ?1",
                    REPORT_COLUMNS
                ))
                .bind(reporter_id)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Report>(&format!("SELECT {} FROM reports", REPORT_COLUMNS))
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| {
            tracing::error!("Failed to list reports: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(reports)
    }

    /// Get a single report by id
    #[allow(dead_code)]
    pub async fn get_by_id(&self, report_id: &str) -> Result<Report> {
        sqlx::query_as::<_, Report>(&format!(
            "SELECT {} FROM reports WHERE report_id = ?1",
            REPORT_COLUMNS
        ))
        .bind(report_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get report: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Report {} not found", report_id)))
    }

    /// Overwrite the status of an existing report
    pub async fn update_status(&self, report_id: &str, status: &str) -> Result<()> {
        let result = sqlx::query("UPDATE reports SET status = ?2 WHERE report_id = ?1")
            .bind(report_id)
            .bind(status)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update report status: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Report {} not found",
                report_id
            )));
        }

        tracing::info!("Updated report {} status to {}", report_id, status);
        Ok(())
    }

    /// Remove a report row. Media files on disk are left in place.
    pub async fn delete(&self, report_id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM reports WHERE report_id = ?1")
            .bind(report_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete report: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Report {} not found",
                report_id
            )));
        }

        tracing::info!("Deleted report: {}", report_id);
        Ok(())
    }
}
