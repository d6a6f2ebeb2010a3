#[cfg(test)]
use chrono::NaiveDate;
#[cfg(test)]
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
#[cfg(test)]
use std::str::FromStr;
#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
use crate::features::reports::dtos::CreateReportDto;
#[cfg(test)]
use crate::features::reports::models::Report;
#[cfg(test)]
use crate::modules::storage::MediaStore;

/// In-memory database with the schema applied.
///
/// A single connection so every query in the test sees the same database.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    // Match the production pool: foreign keys stay unenforced (see
    // `core::database::create_pool`).
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("invalid connection string")
        .foreign_keys(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    pool
}

/// Media store rooted in a fresh temporary directory.
///
/// The `TempDir` guard must stay alive for the duration of the test.
#[cfg(test)]
pub fn test_media_store() -> (tempfile::TempDir, MediaStore) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let store = MediaStore::new(dir.path());
    (dir, store)
}

#[cfg(test)]
pub fn test_report(reporter_id: &str) -> Report {
    Report {
        report_id: Uuid::new_v4().to_string(),
        reporter_id: reporter_id.to_string(),
        catalog_id: "c1".to_string(),
        subcategory: "s1".to_string(),
        subject: "broken light".to_string(),
        description: "the street light on the corner is out".to_string(),
        image_ref: None,
        video_ref: None,
        audio_ref: None,
        submission_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        location_lat: None,
        location_lng: None,
        status: "pending".to_string(),
    }
}

#[cfg(test)]
pub fn test_draft(reporter_id: &str) -> CreateReportDto {
    CreateReportDto {
        reporter_id: reporter_id.to_string(),
        catalog_id: "c1".to_string(),
        subcategory: "s1".to_string(),
        subject: "broken light".to_string(),
        description: "the street light on the corner is out".to_string(),
        submission_date: None,
        image: None,
        video: None,
        audio: None,
        location: None,
    }
}
