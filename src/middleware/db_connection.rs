// src/middleware/db_connection.rs

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use sqlx::{pool::PoolConnection, MySql};
use tokio::sync::{Mutex, MutexGuard};

use crate::{common::error::AppError, config::AppState};

/// Conexão retirada da pool para a requisição atual.
///
/// Volta para a pool quando a última cópia é descartada, o que acontece
/// assim que a resposta é produzida, com sucesso ou com erro.
#[derive(Clone)]
pub struct DbConn(Arc<Mutex<PoolConnection<MySql>>>);

impl DbConn {
    pub async fn lock(&self) -> MutexGuard<'_, PoolConnection<MySql>> {
        self.0.lock().await
    }
}

// Middleware: nenhuma rota roda sem uma conexão
pub async fn acquire_connection(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let conn = app_state.db_pool.acquire().await.map_err(|e| {
        tracing::error!("Erro ao obter conexão: {}", e);
        AppError::ConnectionUnavailable(e)
    })?;

    let db = DbConn(Arc::new(Mutex::new(conn)));
    request.extensions_mut().insert(db.clone());

    let response = next.run(request).await;
    drop(db);

    Ok(response)
}

impl<S> FromRequestParts<S> for DbConn
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<DbConn>()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Rota sem o middleware de conexão").into())
    }
}
