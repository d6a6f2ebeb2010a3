use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::reporters::dtos::{CreateReporterDto, ReporterResponseDto};
use crate::features::reporters::services::ReporterService;
use crate::shared::types::{ApiResponse, Meta};

/// Register a new reporter
#[utoipa::path(
    post,
    path = "/reporters/",
    request_body = CreateReporterDto,
    responses(
        (status = 200, description = "Reporter registered", body = ApiResponse<ReporterResponseDto>),
        (status = 400, description = "Invalid reporter data")
    ),
    tag = "reporters"
)]
pub async fn register_reporter(
    State(service): State<Arc<ReporterService>>,
    AppJson(dto): AppJson<CreateReporterDto>,
) -> Result<Json<ApiResponse<ReporterResponseDto>>> {
    let reporter = service.register(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(reporter),
        Some("Reporter registered successfully".to_string()),
        None,
    )))
}

/// List registered reporters
#[utoipa::path(
    get,
    path = "/reporters/",
    responses(
        (status = 200, description = "List of reporters", body = ApiResponse<Vec<ReporterResponseDto>>)
    ),
    tag = "reporters"
)]
pub async fn list_reporters(
    State(service): State<Arc<ReporterService>>,
) -> Result<Json<ApiResponse<Vec<ReporterResponseDto>>>> {
    let reporters = service.list().await?;
    let total = reporters.len() as i64;
    let dtos: Vec<ReporterResponseDto> = reporters.into_iter().map(|r| r.into()).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reporters::routes;
    use crate::shared::test_helpers::test_pool;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    async fn server() -> TestServer {
        let pool = test_pool().await;
        let service = Arc::new(ReporterService::new(pool));
        TestServer::new(routes::routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_register_then_list() {
        let server = server().await;

        let created = server
            .post("/reporters/")
            .json(&json!({"name": "Ana"}))
            .await;
        created.assert_status(StatusCode::OK);

        let body: Value = server.get("/reporters/").await.json();
        let reporters = body["data"].as_array().unwrap();
        assert_eq!(reporters.len(), 1);
        assert_eq!(reporters[0]["name"], json!("Ana"));
    }

    #[tokio::test]
    async fn test_register_without_name_is_rejected() {
        let server = server().await;

        server
            .post("/reporters/")
            .json(&json!({"name": ""}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
