// src/handlers/requisicao.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::db_connection::DbConn,
    models::requisicao::{EstatisticasResponse, TotaisPorMesResponse},
};

// GET /requisicoes/estatisticas
#[utoipa::path(
    get,
    path = "/requisicoes/estatisticas",
    tag = "Requisições",
    responses(
        (status = 200, description = "Contagem por status nos últimos 6 meses", body = EstatisticasResponse)
    )
)]
pub async fn get_estatisticas(
    State(app_state): State<AppState>,
    db: DbConn,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = db.lock().await;
    let estatisticas = app_state.requisicao_service.estatisticas(&mut **conn).await?;
    Ok((StatusCode::OK, Json(EstatisticasResponse { success: true, estatisticas })))
}

// GET /api/requisicoes (usada pelo gráfico do app)
#[utoipa::path(
    get,
    path = "/api/requisicoes",
    tag = "Requisições",
    responses(
        (status = 200, description = "Total de requisições por mês, em ordem de calendário", body = TotaisPorMesResponse),
        (status = 404, description = "Tabela inexistente ou sem dados")
    )
)]
pub async fn get_totais_por_mes(
    State(app_state): State<AppState>,
    db: DbConn,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = db.lock().await;
    let data = app_state.requisicao_service.totais_por_mes(&mut **conn).await?;
    Ok((StatusCode::OK, Json(TotaisPorMesResponse { success: true, data })))
}
