// src/handlers/status.rs

use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::AppError,
    middleware::db_connection::DbConn,
    models::status::{StatusResponse, TestDbResponse, TesteBanco},
};

// GET /
#[utoipa::path(
    get,
    path = "/",
    tag = "Status",
    responses(
        (status = 200, description = "API no ar", body = StatusResponse)
    )
)]
pub async fn status() -> impl IntoResponse {
    Json(StatusResponse {
        success: true,
        message: "API funcionando!".to_string(),
        timestamp: chrono::Utc::now(),
    })
}

// GET /test-db
#[utoipa::path(
    get,
    path = "/test-db",
    tag = "Status",
    responses(
        (status = 200, description = "Banco respondeu ao SELECT 1", body = TestDbResponse),
        (status = 500, description = "Erro na conexão com banco")
    )
)]
pub async fn test_db(db: DbConn) -> Result<impl IntoResponse, AppError> {
    let mut conn = db.lock().await;

    let test: i64 = sqlx::query_scalar("SELECT 1 AS test")
        .fetch_one(&mut **conn)
        .await
        .map_err(|source| AppError::DatabaseContext {
            message: "Erro na conexão com banco",
            source,
        })?;

    Ok((
        StatusCode::OK,
        Json(TestDbResponse {
            success: true,
            message: "Banco de dados conectado!".to_string(),
            test: TesteBanco { test },
        }),
    ))
}
