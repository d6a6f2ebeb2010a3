use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::reporters::dtos::{CreateReporterDto, ReporterResponseDto};
use crate::features::reporters::models::Reporter;

/// Service for reporter registration and lookup
pub struct ReporterService {
    pool: SqlitePool,
}

impl ReporterService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Register a reporter, generating an id when the client supplied none
    pub async fn register(&self, dto: CreateReporterDto) -> Result<ReporterResponseDto> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let reporter = Reporter {
            reporter_id: dto
                .reporter_id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: dto.name,
        };

        sqlx::query("INSERT INTO reporters (reporter_id, name) VALUES (?1, ?2)")
            .bind(&reporter.reporter_id)
            .bind(&reporter.name)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert reporter: {:?}", e);
                AppError::BadRequest(e.to_string())
            })?;

        tracing::info!("Reporter registered: {}", reporter.reporter_id);

        Ok(reporter.into())
    }

    /// List all registered reporters
    pub async fn list(&self) -> Result<Vec<Reporter>> {
        sqlx::query_as::<_, Reporter>("SELECT reporter_id, name FROM reporters")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list reporters: {:?}", e);
                AppError::Database(e)
            })
    }
}
