// src/handlers/auth.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::WithRejection;
use validator::Validate;

use crate::{
    common::{
        error::AppError,
        extract::JsonBody,
    },
    config::AppState,
    middleware::db_connection::DbConn,
    models::funcionario::{CheckEmailPayload, CheckEmailResponse, LoginPayload, LoginResponse},
};

// POST /login
#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Credenciais conferem", body = LoginResponse),
        (status = 400, description = "E-mail ou senha ausentes"),
        (status = 401, description = "E-mail ou senha inválidos")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    db: DbConn,
    WithRejection(Json(payload), _): JsonBody<LoginPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut conn = db.lock().await;
    let funcionario = app_state
        .funcionario_service
        .login(&mut **conn, &payload.email, &payload.senha)
        .await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            success: true,
            message: "Login realizado com sucesso".to_string(),
            usuario: funcionario.into(),
        }),
    ))
}

// POST /check-email
#[utoipa::path(
    post,
    path = "/check-email",
    tag = "Auth",
    request_body = CheckEmailPayload,
    responses(
        (status = 200, description = "Se o e-mail já está em uso por outro funcionário", body = CheckEmailResponse),
        (status = 400, description = "E-mail ausente")
    )
)]
pub async fn check_email(
    State(app_state): State<AppState>,
    db: DbConn,
    WithRejection(Json(payload), _): JsonBody<CheckEmailPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut conn = db.lock().await;
    let exists = app_state
        .funcionario_service
        .email_exists(&mut **conn, &payload.email, payload.exclude_id)
        .await?;

    Ok((StatusCode::OK, Json(CheckEmailResponse { success: true, exists })))
}
