// src/services/funcionario_service.rs

use bcrypt::{hash, verify};
use sqlx::{Acquire, Executor, MySql};

use crate::{
    common::error::AppError,
    db::FuncionarioRepository,
    models::funcionario::{AtualizarFuncionarioPayload, Funcionario},
};

const NAO_ENCONTRADO: &str = "Funcionário não encontrado";

fn nao_encontrado() -> AppError {
    AppError::NotFound(NAO_ENCONTRADO.to_string())
}

/// Senhas gravadas por este serviço são hashes bcrypt; linhas antigas ainda
/// guardam texto puro e continuam sendo comparadas diretamente.
fn senha_confere(informada: &str, armazenada: &str) -> Result<bool, bcrypt::BcryptError> {
    if armazenada.starts_with("$2") {
        verify(informada, armazenada)
    } else {
        Ok(informada == armazenada)
    }
}

#[derive(Clone)]
pub struct FuncionarioService {
    repo: FuncionarioRepository,
}

impl FuncionarioService {
    pub fn new(repo: FuncionarioRepository) -> Self {
        Self { repo }
    }

    pub async fn list<'e, E>(&self, executor: E) -> Result<Vec<Funcionario>, AppError>
    where
        E: Executor<'e, Database = MySql>,
    {
        self.repo.list_all(executor).await
    }

    pub async fn get<'e, E>(&self, executor: E, id: i64) -> Result<Funcionario, AppError>
    where
        E: Executor<'e, Database = MySql>,
    {
        self.repo.find_by_id(executor, id).await?.ok_or_else(nao_encontrado)
    }

    // --- UPDATE (total ou parcial) ---
    // O payload já chega normalizado e validado pelo handler.
    pub async fn update<'e, A>(
        &self,
        conn: A,
        id: i64,
        payload: AtualizarFuncionarioPayload,
    ) -> Result<Funcionario, AppError>
    where
        A: Acquire<'e, Database = MySql>,
    {
        let mut campos: Vec<(&'static str, String)> = Vec::new();
        for (coluna, valor) in payload.alteracoes() {
            let valor = if coluna == "senha" {
                hash_senha(valor).await?
            } else {
                valor.to_string()
            };
            campos.push((coluna, valor));
        }

        if campos.is_empty() {
            return Err(AppError::BadRequest("Nenhum campo para atualizar".to_string()));
        }

        // Checagem + UPDATE + releitura numa única transação
        let mut tx = conn.begin().await?;

        if !self.repo.exists(&mut *tx, id).await? {
            return Err(nao_encontrado());
        }

        self.repo.update_fields(&mut *tx, id, campos).await?;

        let atualizado = self
            .repo
            .find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(nao_encontrado)?;

        tx.commit().await?;

        tracing::info!("Funcionário {} atualizado", id);
        Ok(atualizado)
    }

    pub async fn update_foto<'e, A>(&self, conn: A, id: i64, foto: &str) -> Result<(), AppError>
    where
        A: Acquire<'e, Database = MySql>,
    {
        let mut tx = conn.begin().await?;

        // MySQL conta como 0 linhas afetadas quando o valor não muda
        if !self.repo.exists(&mut *tx, id).await? {
            return Err(nao_encontrado());
        }
        self.repo.update_foto(&mut *tx, id, foto).await?;

        tx.commit().await?;

        tracing::info!("Foto atualizada com sucesso para funcionário ID: {}", id);
        Ok(())
    }

    pub async fn login<'e, E>(&self, executor: E, email: &str, senha: &str) -> Result<Funcionario, AppError>
    where
        E: Executor<'e, Database = MySql>,
    {
        let funcionario = self
            .repo
            .find_by_email(executor, email.trim())
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let Some(armazenada) = funcionario.senha.clone() else {
            return Err(AppError::InvalidCredentials);
        };
        let informada = senha.to_owned();

        // Executa a verificação em um thread separado
        let senha_valida = tokio::task::spawn_blocking(move || senha_confere(&informada, &armazenada))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !senha_valida {
            return Err(AppError::InvalidCredentials);
        }

        tracing::info!("Login de funcionário {}", funcionario.id);
        Ok(funcionario)
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
        self.repo.email_exists(executor, email.trim(), exclude_id).await
    }
}

async fn hash_senha(senha: &str) -> Result<String, AppError> {
    let senha = senha.to_owned();
    let hashed = tokio::task::spawn_blocking(move || hash(&senha, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;
    Ok(hashed)
}
