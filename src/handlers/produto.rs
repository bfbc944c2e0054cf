// src/handlers/produto.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    common::{
        error::AppError,
        extract::PathParam,
    },
    config::AppState,
    middleware::db_connection::DbConn,
    models::produto::{CategoriasResponse, ProdutoResponse, ProdutoView, ProdutosResponse},
};

fn listagem(produtos: Vec<ProdutoView>) -> Json<ProdutosResponse> {
    Json(ProdutosResponse {
        success: true,
        total: produtos.len(),
        produtos,
    })
}

// GET /produto
#[utoipa::path(
    get,
    path = "/produto",
    tag = "Produtos",
    responses(
        (status = 200, description = "Produtos ativos", body = ProdutosResponse)
    )
)]
pub async fn list_produtos(
    State(app_state): State<AppState>,
    db: DbConn,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = db.lock().await;
    let produtos = app_state.produto_service.list(&mut **conn).await?;
    Ok((StatusCode::OK, listagem(produtos)))
}

// GET /produto/{id}
#[utoipa::path(
    get,
    path = "/produto/{id}",
    tag = "Produtos",
    params(("id" = i64, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Produto ativo", body = ProdutoResponse),
        (status = 404, description = "Produto não encontrado ou inativo")
    )
)]
pub async fn get_produto(
    State(app_state): State<AppState>,
    db: DbConn,
    WithRejection(Path(id), _): PathParam<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = db.lock().await;
    let produto = app_state.produto_service.get(&mut **conn, id).await?;
    Ok((StatusCode::OK, Json(ProdutoResponse { success: true, produto })))
}

// GET /produto/categoria/{categoria}
#[utoipa::path(
    get,
    path = "/produto/categoria/{categoria}",
    tag = "Produtos",
    params(("categoria" = String, Path, description = "Nome da categoria")),
    responses(
        (status = 200, description = "Produtos ativos da categoria", body = ProdutosResponse)
    )
)]
pub async fn list_por_categoria(
    State(app_state): State<AppState>,
    db: DbConn,
    WithRejection(Path(categoria), _): PathParam<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = db.lock().await;
    let produtos = app_state
        .produto_service
        .list_by_categoria(&mut **conn, &categoria)
        .await?;
    Ok((StatusCode::OK, listagem(produtos)))
}

// GET /produto/estoque/baixo
#[utoipa::path(
    get,
    path = "/produto/estoque/baixo",
    tag = "Produtos",
    responses(
        (status = 200, description = "Produtos ativos com quantidade <= mínimo", body = ProdutosResponse)
    )
)]
pub async fn list_estoque_baixo(
    State(app_state): State<AppState>,
    db: DbConn,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = db.lock().await;
    let produtos = app_state.produto_service.list_estoque_baixo(&mut **conn).await?;
    Ok((StatusCode::OK, listagem(produtos)))
}

// GET /categorias
#[utoipa::path(
    get,
    path = "/categorias",
    tag = "Produtos",
    responses(
        (status = 200, description = "Categorias com ao menos um produto ativo", body = CategoriasResponse)
    )
)]
pub async fn list_categorias(
    State(app_state): State<AppState>,
    db: DbConn,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = db.lock().await;
    let categorias = app_state.produto_service.list_categorias(&mut **conn).await?;
    Ok((StatusCode::OK, Json(CategoriasResponse { success: true, categorias })))
}
