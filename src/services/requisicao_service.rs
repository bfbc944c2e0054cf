// src/services/requisicao_service.rs

use sqlx::{Executor, MySql, MySqlConnection};

use crate::{
    common::error::AppError,
    db::RequisicaoRepository,
    models::requisicao::{ordem_do_mes, EstatisticaMensal, TotalPorMes},
};

#[derive(Clone)]
pub struct RequisicaoService {
    repo: RequisicaoRepository,
}

impl RequisicaoService {
    pub fn new(repo: RequisicaoRepository) -> Self {
        Self { repo }
    }

    pub async fn estatisticas<'e, E>(&self, executor: E) -> Result<Vec<EstatisticaMensal>, AppError>
    where
        E: Executor<'e, Database = MySql>,
    {
        self.repo.estatisticas_ultimos_seis_meses(executor).await
    }

    // Rota legada: confere a tabela antes de agregar
    pub async fn totais_por_mes(&self, conn: &mut MySqlConnection) -> Result<Vec<TotalPorMes>, AppError> {
        if !self.repo.tabela_existe(&mut *conn).await? {
            return Err(AppError::NotFound("Tabela requisicoes não encontrada".to_string()));
        }

        let mut totais = self.repo.totais_por_mes(&mut *conn).await?;
        if totais.is_empty() {
            return Err(AppError::NotFound("Nenhum dado encontrado".to_string()));
        }

        ordenar_por_calendario(&mut totais);
        Ok(totais)
    }
}

fn ordenar_por_calendario(totais: &mut [TotalPorMes]) {
    totais.sort_by_key(|t| ordem_do_mes(t.mes.as_deref()));
}
