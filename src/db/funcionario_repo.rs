// src/db/funcionario_repo.rs

use sqlx::{Executor, MySql, QueryBuilder};
use crate::{common::error::AppError, models::funcionario::Funcionario};

// Todas as interações com a tabela 'funcionarios'.
// A conexão vem de fora (a conexão da requisição ou uma transação sobre ela).
#[derive(Clone, Default)]
pub struct FuncionarioRepository;

impl FuncionarioRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn list_all<'e, E>(&self, executor: E) -> Result<Vec<Funcionario>, AppError>
    where
        E: Executor<'e, Database = MySql>,
    {
        let funcionarios = sqlx::query_as::<_, Funcionario>("SELECT * FROM funcionarios ORDER BY nome ASC")
            .fetch_all(executor)
            .await?;
        Ok(funcionarios)
    }

    pub async fn find_by_id<'e, E>(&self, executor: E, id: i64) -> Result<Option<Funcionario>, AppError>
    where
        E: Executor<'e, Database = MySql>,
    {
        let funcionario = sqlx::query_as::<_, Funcionario>("SELECT * FROM funcionarios WHERE id = ?")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(funcionario)
    }

    // Busca pelo e-mail, que é o identificador de login
    pub async fn find_by_email<'e, E>(&self, executor: E, email: &str) -> Result<Option<Funcionario>, AppError>
    where
        E: Executor<'e, Database = MySql>,
    {
        let funcionario = sqlx::query_as::<_, Funcionario>("SELECT * FROM funcionarios WHERE email = ? LIMIT 1")
            .bind(email)
            .fetch_optional(executor)
            .await?;
        Ok(funcionario)
    }

    pub async fn exists<'e, E>(&self, executor: E, id: i64) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = MySql>,
    {
        let row = sqlx::query("SELECT id FROM funcionarios WHERE id = ?")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(row.is_some())
    }

    pub async fn email_exists<'e, E>(
        &self,
        executor: E,
        email: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = MySql>,
    {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM funcionarios WHERE email = ? AND (? IS NULL OR id <> ?)",
        )
        .bind(email)
        .bind(exclude_id)
        .bind(exclude_id)
        .fetch_one(executor)
        .await?;
        Ok(total > 0)
    }

    /// Monta o UPDATE só com as colunas informadas. Chamar com lista vazia é erro de uso.
    pub async fn update_fields<'e, E>(
        &self,
        executor: E,
        id: i64,
        campos: Vec<(&'static str, String)>,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = MySql>,
    {
        if campos.is_empty() {
            return Err(anyhow::anyhow!("UPDATE de funcionário sem colunas").into());
        }

        let mut builder = QueryBuilder::<MySql>::new("UPDATE funcionarios SET ");
        let mut separated = builder.separated(", ");
        for (coluna, valor) in campos {
            // nomes de coluna vêm de uma lista fixa no model, nunca do cliente
            separated.push(format!("{coluna} = "));
            separated.push_bind_unseparated(valor);
        }
        builder.push(" WHERE id = ").push_bind(id);

        let result = builder.build().execute(executor).await?;
        Ok(result.rows_affected())
    }

    pub async fn update_foto<'e, E>(&self, executor: E, id: i64, foto: &str) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = MySql>,
    {
        let result = sqlx::query("UPDATE funcionarios SET FotoPerfil = ? WHERE id = ?")
            .bind(foto)
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
