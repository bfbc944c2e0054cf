// src/db/produto_repo.rs

use sqlx::{Executor, MySql};
use crate::{common::error::AppError, models::produto::Produto};

// Toda listagem enxerga só produtos ativos; 'status' funciona como exclusão lógica.
const SELECT_ATIVOS: &str = r#"
    SELECT id, nome, descricao, categoria, preco, quantidade, minimo,
           fornecedor, status, created_at, updated_at
    FROM produto
    WHERE status = 'ativo'
"#;

#[derive(Clone, Default)]
pub struct ProdutoRepository;

impl ProdutoRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn list_ativos<'e, E>(&self, executor: E) -> Result<Vec<Produto>, AppError>
    where
        E: Executor<'e, Database = MySql>,
    {
        let sql = format!("{SELECT_ATIVOS} ORDER BY nome ASC");
        let produtos = sqlx::query_as::<_, Produto>(&sql).fetch_all(executor).await?;
        Ok(produtos)
    }

    pub async fn find_ativo_by_id<'e, E>(&self, executor: E, id: i64) -> Result<Option<Produto>, AppError>
    where
        E: Executor<'e, Database = MySql>,
    {
        let sql = format!("{SELECT_ATIVOS} AND id = ?");
        let produto = sqlx::query_as::<_, Produto>(&sql)
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(produto)
    }

    pub async fn list_by_categoria<'e, E>(&self, executor: E, categoria: &str) -> Result<Vec<Produto>, AppError>
    where
        E: Executor<'e, Database = MySql>,
    {
        let sql = format!("{SELECT_ATIVOS} AND categoria = ? ORDER BY nome ASC");
        let produtos = sqlx::query_as::<_, Produto>(&sql)
            .bind(categoria)
            .fetch_all(executor)
            .await?;
        Ok(produtos)
    }

    pub async fn list_estoque_baixo<'e, E>(&self, executor: E) -> Result<Vec<Produto>, AppError>
    where
        E: Executor<'e, Database = MySql>,
    {
        let sql = format!("{SELECT_ATIVOS} AND quantidade <= minimo ORDER BY quantidade ASC, nome ASC");
        let produtos = sqlx::query_as::<_, Produto>(&sql).fetch_all(executor).await?;
        Ok(produtos)
    }

    pub async fn list_categorias<'e, E>(&self, executor: E) -> Result<Vec<String>, AppError>
    where
        E: Executor<'e, Database = MySql>,
    {
        let categorias = sqlx::query_scalar::<_, String>(
            r#"
            SELECT DISTINCT categoria
            FROM produto
            WHERE status = 'ativo' AND categoria IS NOT NULL AND categoria <> ''
            ORDER BY categoria ASC
            "#,
        )
        .fetch_all(executor)
        .await?;
        Ok(categorias)
    }
}
