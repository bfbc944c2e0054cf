// src/handlers/funcionario.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use validator::Validate;

use crate::{
    common::{
        error::AppError,
        extract::{JsonBody, PathParam},
    },
    config::AppState,
    middleware::db_connection::DbConn,
    models::{
        funcionario::{
            validar_foto, AtualizarFotoPayload, AtualizarFuncionarioPayload, FuncionarioPublico,
            FuncionarioResponse, FuncionariosResponse,
        },
        status::MensagemResponse,
    },
};

// GET /funcionarios
#[utoipa::path(
    get,
    path = "/funcionarios",
    tag = "Funcionários",
    responses(
        (status = 200, description = "Todos os funcionários", body = FuncionariosResponse)
    )
)]
pub async fn list_funcionarios(
    State(app_state): State<AppState>,
    db: DbConn,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = db.lock().await;

    let funcionarios = app_state
        .funcionario_service
        .list(&mut **conn)
        .await?
        .into_iter()
        .map(FuncionarioPublico::from)
        .collect();

    Ok((StatusCode::OK, Json(FuncionariosResponse { success: true, funcionarios })))
}

// GET /funcionario/{id}
#[utoipa::path(
    get,
    path = "/funcionario/{id}",
    tag = "Funcionários",
    params(("id" = i64, Path, description = "ID do funcionário")),
    responses(
        (status = 200, description = "Funcionário com as duas grafias de cada campo", body = FuncionarioResponse),
        (status = 404, description = "Funcionário não encontrado")
    )
)]
pub async fn get_funcionario(
    State(app_state): State<AppState>,
    db: DbConn,
    WithRejection(Path(id), _): PathParam<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = db.lock().await;

    let funcionario = app_state.funcionario_service.get(&mut **conn, id).await?;

    Ok((
        StatusCode::OK,
        Json(FuncionarioResponse {
            success: true,
            message: None,
            funcionario: funcionario.into(),
        }),
    ))
}

// PUT /funcionario/{id}
#[utoipa::path(
    put,
    path = "/funcionario/{id}",
    tag = "Funcionários",
    params(("id" = i64, Path, description = "ID do funcionário")),
    request_body = AtualizarFuncionarioPayload,
    responses(
        (status = 200, description = "Funcionário atualizado e relido", body = FuncionarioResponse),
        (status = 400, description = "E-mail inválido, foto inválida ou nada para atualizar"),
        (status = 404, description = "Funcionário não encontrado")
    )
)]
pub async fn update_funcionario(
    State(app_state): State<AppState>,
    db: DbConn,
    WithRejection(Path(id), _): PathParam<i64>,
    WithRejection(Json(payload), _): JsonBody<AtualizarFuncionarioPayload>,
) -> Result<impl IntoResponse, AppError> {
    // Valida antes de tocar no banco: payload inválido nunca gera escrita
    let payload = payload.normalizado();
    payload.validate()?;

    let mut conn = db.lock().await;

    let funcionario = app_state
        .funcionario_service
        .update(&mut **conn, id, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(FuncionarioResponse {
            success: true,
            message: Some("Funcionário atualizado com sucesso".to_string()),
            funcionario: funcionario.into(),
        }),
    ))
}

// PUT /funcionario/{id}/foto
#[utoipa::path(
    put,
    path = "/funcionario/{id}/foto",
    tag = "Funcionários",
    params(("id" = i64, Path, description = "ID do funcionário")),
    request_body = AtualizarFotoPayload,
    responses(
        (status = 200, description = "Foto gravada", body = MensagemResponse),
        (status = 400, description = "Foto ausente ou fora do formato data:image/"),
        (status = 404, description = "Funcionário não encontrado")
    )
)]
pub async fn update_foto(
    State(app_state): State<AppState>,
    db: DbConn,
    WithRejection(Path(id), _): PathParam<i64>,
    WithRejection(Json(payload), _): JsonBody<AtualizarFotoPayload>,
) -> Result<impl IntoResponse, AppError> {
    let foto = payload
        .foto_perfil
        .filter(|f| !f.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("Foto é obrigatória".to_string()))?;

    validar_foto(&foto).map_err(|_| AppError::BadRequest("Formato de imagem inválido".to_string()))?;

    tracing::info!("Atualizando foto do funcionário ID: {}", id);

    let mut conn = db.lock().await;
    app_state.funcionario_service.update_foto(&mut **conn, id, &foto).await?;

    Ok((
        StatusCode::OK,
        Json(MensagemResponse {
            success: true,
            message: "Foto de perfil atualizada com sucesso".to_string(),
        }),
    ))
}
