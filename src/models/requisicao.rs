// src/models/requisicao.rs

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

// Uma linha do agregado mensal dos últimos seis meses
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct EstatisticaMensal {
    pub mes: String, // YYYY-MM
    pub total: i64,
    pub atendidas: i64,
    pub pendentes: i64,
    pub atrasadas: i64,
}

// Contagem por rótulo de mês (coluna 'mes' é texto livre)
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct TotalPorMes {
    pub mes: Option<String>,
    pub total_requisicoes: i64,
}

const MESES: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho",
    "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
];

/// Posição do mês no calendário (1..=12). Rótulos desconhecidos vão para o fim.
pub fn ordem_do_mes(mes: Option<&str>) -> u8 {
    let Some(mes) = mes else { return 13 };
    let normalizado = mes.trim().to_lowercase().replace("marco", "março");

    MESES
        .iter()
        .position(|m| *m == normalizado)
        .map(|i| i as u8 + 1)
        .unwrap_or(13)
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EstatisticasResponse {
    pub success: bool,
    pub estatisticas: Vec<EstatisticaMensal>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TotaisPorMesResponse {
    pub success: bool,
    pub data: Vec<TotalPorMes>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_follow_the_calendar() {
        assert_eq!(ordem_do_mes(Some("Janeiro")), 1);
        assert_eq!(ordem_do_mes(Some("Março")), 3);
        assert_eq!(ordem_do_mes(Some("marco")), 3);
        assert_eq!(ordem_do_mes(Some(" DEZEMBRO ")), 12);
    }

    #[test]
    fn unknown_labels_sort_last() {
        assert_eq!(ordem_do_mes(Some("2024-05")), 13);
        assert_eq!(ordem_do_mes(None), 13);
    }
}
