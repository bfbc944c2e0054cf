// src/services/produto_service.rs

use sqlx::{Executor, MySql};

use crate::{
    common::error::AppError,
    db::ProdutoRepository,
    models::produto::ProdutoView,
};

#[derive(Clone)]
pub struct ProdutoService {
    repo: ProdutoRepository,
}

impl ProdutoService {
    pub fn new(repo: ProdutoRepository) -> Self {
        Self { repo }
    }

    pub async fn list<'e, E>(&self, executor: E) -> Result<Vec<ProdutoView>, AppError>
    where
        E: Executor<'e, Database = MySql>,
    {
        let produtos = self.repo.list_ativos(executor).await?;
        Ok(produtos.into_iter().map(ProdutoView::from).collect())
    }

    pub async fn get<'e, E>(&self, executor: E, id: i64) -> Result<ProdutoView, AppError>
    where
        E: Executor<'e, Database = MySql>,
    {
        self.repo
            .find_ativo_by_id(executor, id)
            .await?
            .map(ProdutoView::from)
            .ok_or_else(|| AppError::NotFound("Produto não encontrado".to_string()))
    }

    pub async fn list_by_categoria<'e, E>(&self, executor: E, categoria: &str) -> Result<Vec<ProdutoView>, AppError>
    where
        E: Executor<'e, Database = MySql>,
    {
        let produtos = self.repo.list_by_categoria(executor, categoria.trim()).await?;
        Ok(produtos.into_iter().map(ProdutoView::from).collect())
    }

    pub async fn list_estoque_baixo<'e, E>(&self, executor: E) -> Result<Vec<ProdutoView>, AppError>
    where
        E: Executor<'e, Database = MySql>,
    {
        let produtos = self.repo.list_estoque_baixo(executor).await?;
        if !produtos.is_empty() {
            tracing::warn!("{} produto(s) com estoque baixo", produtos.len());
        }
        Ok(produtos.into_iter().map(ProdutoView::from).collect())
    }

    pub async fn list_categorias<'e, E>(&self, executor: E) -> Result<Vec<String>, AppError>
    where
        E: Executor<'e, Database = MySql>,
    {
        self.repo.list_categorias(executor).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::produto::EstoqueStatus;
    use sqlx::MySqlPool;

    fn service() -> ProdutoService {
        ProdutoService::new(ProdutoRepository::new())
    }

    async fn inserir(pool: &MySqlPool, nome: &str, quantidade: i32, minimo: i32, status: &str) -> i64 {
        sqlx::query(
            "INSERT INTO produto (nome, categoria, preco, quantidade, minimo, status) VALUES (?, 'EPI', 10.50, ?, ?, ?)",
        )
        .bind(nome)
        .bind(quantidade)
        .bind(minimo)
        .bind(status)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_id() as i64
    }

    fn nomes(produtos: &[ProdutoView]) -> Vec<String> {
        let mut nomes: Vec<String> = produtos.iter().map(|p| p.nome.clone()).collect();
        nomes.sort();
        nomes
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn listings_only_show_active_products(pool: MySqlPool) {
        inserir(&pool, "Capacete", 10, 2, "ativo").await;
        let inativo = inserir(&pool, "Bota antiga", 1, 5, "inativo").await;
        let mut conn = pool.acquire().await.unwrap();

        let produtos = service().list(&mut *conn).await.unwrap();
        assert_eq!(nomes(&produtos), vec!["Capacete"]);
        assert!(produtos.iter().all(|p| p.status == "ativo"));

        let por_id = service().get(&mut *conn, inativo).await;
        assert!(matches!(por_id, Err(AppError::NotFound(_))));

        assert!(service().list_estoque_baixo(&mut *conn).await.unwrap().is_empty());
        assert_eq!(service().list_categorias(&mut *conn).await.unwrap(), vec!["EPI"]);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn low_stock_is_exactly_quantity_at_or_below_minimum(pool: MySqlPool) {
        inserir(&pool, "Luva", 3, 5, "ativo").await;
        inserir(&pool, "Máscara", 5, 5, "ativo").await;
        inserir(&pool, "Óculos", 10, 5, "ativo").await;
        inserir(&pool, "Avental", 0, 5, "inativo").await;
        let mut conn = pool.acquire().await.unwrap();

        let todos = service().list(&mut *conn).await.unwrap();
        let baixo = service().list_estoque_baixo(&mut *conn).await.unwrap();

        let esperado: Vec<ProdutoView> = todos
            .into_iter()
            .filter(|p| p.quantidade <= p.minimo)
            .collect();
        assert_eq!(nomes(&baixo), nomes(&esperado));
        assert_eq!(nomes(&baixo), vec!["Luva", "Máscara"]);
        assert!(baixo.iter().all(|p| p.estoque_status == EstoqueStatus::Baixo));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn restocked_product_leaves_the_low_stock_list(pool: MySqlPool) {
        let id = inserir(&pool, "Luva", 3, 5, "ativo").await;
        let mut conn = pool.acquire().await.unwrap();

        let baixo = service().list_estoque_baixo(&mut *conn).await.unwrap();
        assert_eq!(baixo.len(), 1);
        assert_eq!(baixo[0].id, id);
        assert_eq!(baixo[0].estoque_status, EstoqueStatus::Baixo);

        sqlx::query("UPDATE produto SET quantidade = 10 WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await
            .unwrap();

        assert!(service().list_estoque_baixo(&mut *conn).await.unwrap().is_empty());
        let produto = service().get(&mut *conn, id).await.unwrap();
        assert_eq!(produto.estoque_status, EstoqueStatus::Normal);
    }
}
