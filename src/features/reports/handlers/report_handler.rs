use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::reports::dtos::{
    CreateReportDto, CreatedReportDto, ListReportsQuery, ReportResponseDto, UpdateStatusDto,
};
use crate::features::reports::services::{ReportService, SubmissionService};
use crate::shared::types::{ApiResponse, Meta};

/// State for report handlers
#[derive(Clone)]
pub struct ReportState {
    pub submission_service: Arc<SubmissionService>,
    pub report_service: Arc<ReportService>,
}

/// Base address of the request, used to rewrite media references.
///
/// Scheme comes from `x-forwarded-proto` when a proxy set it; the service
/// itself always terminates plain TCP.
fn request_base_url(headers: &HeaderMap) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    format!("{}://{}/", scheme, host)
}

/// Submit a new incident report
#[utoipa::path(
    post,
    path = "/incidencias/",
    request_body = CreateReportDto,
    responses(
        (status = 200, description = "Report created", body = ApiResponse<CreatedReportDto>),
        (status = 400, description = "Invalid draft or media payload")
    ),
    tag = "incidencias"
)]
pub async fn create_report(
    State(state): State<ReportState>,
    AppJson(dto): AppJson<CreateReportDto>,
) -> Result<Json<ApiResponse<CreatedReportDto>>> {
    let report = state.submission_service.submit(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(CreatedReportDto {
            report_id: report.report_id,
        }),
        Some("Report created successfully".to_string()),
        None,
    )))
}

/// List reports, optionally filtered by reporter
#[utoipa::path(
    get,
    path = "/incidencias/",
    params(ListReportsQuery),
    responses(
        (status = 200, description = "List of reports", body = ApiResponse<Vec<ReportResponseDto>>)
    ),
    tag = "incidencias"
)]
pub async fn list_reports(
    State(state): State<ReportState>,
    Query(query): Query<ListReportsQuery>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<Vec<ReportResponseDto>>>> {
    let reports = state
        .report_service
        .list(query.id_usuario.as_deref())
        .await?;

    let base_url = request_base_url(&headers);
    let total = reports.len() as i64;
    let dtos: Vec<ReportResponseDto> = reports
        .into_iter()
        .map(|r| ReportResponseDto::from_report(r, &base_url))
        .collect();

    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// Update the workflow status of a report
#[utoipa::path(
    patch,
    path = "/incidencias/{id}/estado",
    params(("id" = String, Path, description = "Report ID")),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Status updated"),
        (status = 404, description = "Report not found")
    ),
    tag = "incidencias"
)]
pub async fn update_report_status(
    State(state): State<ReportState>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateStatusDto>,
) -> Result<Json<ApiResponse<()>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    state.report_service.update_status(&id, &dto.status).await?;

    Ok(Json(ApiResponse::success(
        None,
        Some(format!("Report status changed to {}", dto.status)),
        None,
    )))
}

/// Delete a report
#[utoipa::path(
    delete,
    path = "/incidencias/{id}",
    params(("id" = String, Path, description = "Report ID")),
    responses(
        (status = 200, description = "Report deleted"),
        (status = 404, description = "Report not found")
    ),
    tag = "incidencias"
)]
pub async fn delete_report(
    State(state): State<ReportState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    state.report_service.delete(&id).await?;

    Ok(Json(ApiResponse::success(
        None,
        Some("Report deleted successfully".to_string()),
        None,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::routes;
    use crate::shared::test_helpers::{test_media_store, test_pool};
    use axum::http::{HeaderValue, StatusCode};
    use axum_test::TestServer;
    use base64::prelude::*;
    use serde_json::{json, Value};

    async fn server() -> (tempfile::TempDir, TestServer) {
        let pool = test_pool().await;
        let report_service = Arc::new(ReportService::new(pool));
        let (dir, media_store) = test_media_store();
        let submission_service = Arc::new(SubmissionService::new(
            Arc::clone(&report_service),
            Arc::new(media_store),
        ));
        let app = routes::routes(submission_service, report_service);
        (dir, TestServer::new(app).unwrap())
    }

    fn draft() -> Value {
        json!({
            "reporter_id": "u1",
            "catalog_id": "c1",
            "subcategory": "s1",
            "subject": "broken light",
            "description": "the street light on the corner is out",
            "location": {"lat": 19.4, "lng": -99.1}
        })
    }

    #[test]
    fn test_request_base_url_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("example.com:8080"));
        assert_eq!(request_base_url(&headers), "http://example.com:8080/");

        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));
        assert_eq!(request_base_url(&headers), "https://example.com:8080/");

        assert_eq!(request_base_url(&HeaderMap::new()), "http://localhost/");
    }

    #[tokio::test]
    async fn test_create_then_list_report_view() {
        let (_dir, server) = server().await;

        let created = server.post("/incidencias/").json(&draft()).await;
        created.assert_status(StatusCode::OK);
        let body: Value = created.json();
        assert_eq!(body["success"], json!(true));
        let report_id = body["data"]["report_id"].as_str().unwrap().to_string();

        let listed = server.get("/incidencias/").await;
        listed.assert_status(StatusCode::OK);
        let body: Value = listed.json();
        let views = body["data"].as_array().unwrap();
        assert_eq!(views.len(), 1);

        let view = &views[0];
        assert_eq!(view["report_id"], json!(report_id));
        assert_eq!(view["status"], json!("pending"));
        assert_eq!(view["location"], json!({"lat": 19.4, "lng": -99.1}));
        assert_eq!(view["image"], json!(null));
    }

    #[tokio::test]
    async fn test_list_filters_by_reporter() {
        let (_dir, server) = server().await;

        server.post("/incidencias/").json(&draft()).await.assert_status(StatusCode::OK);
        let mut other = draft();
        other["reporter_id"] = json!("u2");
        server.post("/incidencias/").json(&other).await.assert_status(StatusCode::OK);

        let body: Value = server.get("/incidencias/").await.json();
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["meta"]["total"], json!(2));

        let body: Value = server
            .get("/incidencias/")
            .add_query_param("id_usuario", "u2")
            .await
            .json();
        let views = body["data"].as_array().unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0]["reporter_id"], json!("u2"));
    }

    #[tokio::test]
    async fn test_media_reference_is_rewritten_to_url() {
        let (_dir, server) = server().await;

        let mut with_image = draft();
        with_image["image"] = json!(format!(
            "data:image/png;base64,{}",
            BASE64_STANDARD.encode(b"pixels")
        ));
        server
            .post("/incidencias/")
            .json(&with_image)
            .await
            .assert_status(StatusCode::OK);

        let body: Value = server.get("/incidencias/").await.json();
        let image_url = body["data"][0]["image"].as_str().unwrap();
        assert!(image_url.contains("/uploads/"));
        assert!(image_url.ends_with(".png"));
    }

    #[tokio::test]
    async fn test_malformed_media_is_a_bad_request() {
        let (_dir, server) = server().await;

        let mut bad = draft();
        bad["image"] = json!("data:image/png;base64");
        let response = server.post("/incidencias/").json(&bad).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = server.get("/incidencias/").await.json();
        assert!(body["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_status_update_and_delete_flow() {
        let (_dir, server) = server().await;

        let created: Value = server.post("/incidencias/").json(&draft()).await.json();
        let report_id = created["data"]["report_id"].as_str().unwrap().to_string();

        let updated = server
            .patch(&format!("/incidencias/{}/estado", report_id))
            .json(&json!({"status": "in_progress"}))
            .await;
        updated.assert_status(StatusCode::OK);
        let body: Value = updated.json();
        assert_eq!(
            body["message"],
            json!("Report status changed to in_progress")
        );

        let listed: Value = server.get("/incidencias/").await.json();
        assert_eq!(listed["data"][0]["status"], json!("in_progress"));

        server
            .delete(&format!("/incidencias/{}", report_id))
            .await
            .assert_status(StatusCode::OK);
        let listed: Value = server.get("/incidencias/").await.json();
        assert!(listed["data"].as_array().unwrap().is_empty());

        server
            .delete(&format!("/incidencias/{}", report_id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_status_update_unknown_id_is_not_found() {
        let (_dir, server) = server().await;

        server
            .patch("/incidencias/missing/estado")
            .json(&json!({"status": "done"}))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
