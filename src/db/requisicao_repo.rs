// src/db/requisicao_repo.rs

use sqlx::{Executor, MySql};
use crate::{
    common::error::AppError,
    models::requisicao::{EstatisticaMensal, TotalPorMes},
};

#[derive(Clone, Default)]
pub struct RequisicaoRepository;

impl RequisicaoRepository {
    pub fn new() -> Self {
        Self
    }

    // Contagem por status, mês a mês, nos últimos 6 meses
    pub async fn estatisticas_ultimos_seis_meses<'e, E>(
        &self,
        executor: E,
    ) -> Result<Vec<EstatisticaMensal>, AppError>
    where
        E: Executor<'e, Database = MySql>,
    {
        let data = sqlx::query_as::<_, EstatisticaMensal>(
            r#"
            SELECT
                DATE_FORMAT(data, '%Y-%m') AS mes,
                COUNT(*) AS total,
                CAST(COALESCE(SUM(CASE WHEN status = 'atendida' THEN 1 ELSE 0 END), 0) AS SIGNED) AS atendidas,
                CAST(COALESCE(SUM(CASE WHEN status = 'pendente' THEN 1 ELSE 0 END), 0) AS SIGNED) AS pendentes,
                CAST(COALESCE(SUM(CASE WHEN status = 'atrasada' THEN 1 ELSE 0 END), 0) AS SIGNED) AS atrasadas
            FROM requisicoes
            WHERE data >= DATE_SUB(CURDATE(), INTERVAL 6 MONTH)
            GROUP BY mes
            ORDER BY mes ASC
            "#,
        )
        .fetch_all(executor)
        .await?;

        Ok(data)
    }

    pub async fn tabela_existe<'e, E>(&self, executor: E) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = MySql>,
    {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM information_schema.tables
            WHERE table_schema = DATABASE()
              AND table_name = 'requisicoes'
            "#,
        )
        .fetch_one(executor)
        .await?;
        Ok(total > 0)
    }

    // A ordenação pelo calendário fica no service: 'mes' é texto livre
    pub async fn totais_por_mes<'e, E>(&self, executor: E) -> Result<Vec<TotalPorMes>, AppError>
    where
        E: Executor<'e, Database = MySql>,
    {
        let data = sqlx::query_as::<_, TotalPorMes>(
            "SELECT mes, COUNT(*) AS total_requisicoes FROM requisicoes GROUP BY mes",
        )
        .fetch_all(executor)
        .await?;
        Ok(data)
    }
}
