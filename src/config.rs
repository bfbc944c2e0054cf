// src/config.rs

use anyhow::Context;
use sqlx::{mysql::MySqlPoolOptions, MySqlPool};
use std::{env, str::FromStr, time::Duration};

use crate::{
    db::{FuncionarioRepository, ProdutoRepository, RequisicaoRepository},
    services::{FuncionarioService, ProdutoService, RequisicaoService},
};

// Configuração lida do ambiente (.env incluído)
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    pub json_body_limit: usize,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL deve ser definida")?;

        Ok(Self {
            database_url,
            port: parse_var("PORT", 3000)?,
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", 10)?,
            db_acquire_timeout: Duration::from_secs(parse_var("DB_ACQUIRE_TIMEOUT_SECS", 60)?),
            // Fotos chegam em Base64 dentro do JSON
            json_body_limit: parse_var("JSON_BODY_LIMIT", 10 * 1024 * 1024)?,
            run_migrations: parse_var("RUN_MIGRATIONS", false)?,
        })
    }
}

fn parse_var<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} inválida: {raw:?}")),
        _ => Ok(default),
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: MySqlPool,
    pub json_body_limit: usize,
    pub funcionario_service: FuncionarioService,
    pub produto_service: ProdutoService,
    pub requisicao_service: RequisicaoService,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let db_pool = MySqlPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(config.db_acquire_timeout)
            .connect(&config.database_url)
            .await
            .context("Não foi possível conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::with_pool(db_pool, config.json_body_limit))
    }

    // Monta o gráfico de dependências em cima de uma pool já criada
    pub fn with_pool(db_pool: MySqlPool, json_body_limit: usize) -> Self {
        Self {
            funcionario_service: FuncionarioService::new(FuncionarioRepository::new()),
            produto_service: ProdutoService::new(ProdutoRepository::new()),
            requisicao_service: RequisicaoService::new(RequisicaoRepository::new()),
            db_pool,
            json_body_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variables_fall_back_to_defaults() {
        assert_eq!(parse_var::<u16>("ESTOQUE_BACKEND_TESTE_PORTA_AUSENTE", 3000).unwrap(), 3000);
        assert!(!parse_var::<bool>("ESTOQUE_BACKEND_TESTE_FLAG_AUSENTE", false).unwrap());
    }
}
