// src/models/produto.rs

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

// Linha da tabela 'produto'
#[derive(Debug, Clone, FromRow)]
pub struct Produto {
    pub id: i64,
    pub nome: String,
    pub descricao: Option<String>,
    pub categoria: Option<String>,
    pub preco: Decimal,
    pub quantidade: i32,
    pub minimo: i32,
    pub fornecedor: Option<String>,
    pub status: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EstoqueStatus {
    Baixo,
    Normal,
}

impl EstoqueStatus {
    pub fn de(quantidade: i32, minimo: i32) -> Self {
        if quantidade <= minimo {
            EstoqueStatus::Baixo
        } else {
            EstoqueStatus::Normal
        }
    }
}

/// Formata um preço no padrão brasileiro: `R$ 1.234,56`.
pub fn formatar_preco(preco: Decimal) -> String {
    let valor = preco.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sinal = if valor.is_sign_negative() && !valor.is_zero() { "-" } else { "" };

    let texto = format!("{:.2}", valor.abs());
    let (inteiro, centavos) = texto.split_once('.').unwrap_or((texto.as_str(), "00"));

    let mut agrupado = String::with_capacity(inteiro.len() + inteiro.len() / 3);
    for (i, digito) in inteiro.chars().enumerate() {
        if i > 0 && (inteiro.len() - i) % 3 == 0 {
            agrupado.push('.');
        }
        agrupado.push(digito);
    }

    format!("{sinal}R$ {agrupado},{centavos}")
}

// Produto como sai na API, com os campos derivados
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProdutoView {
    pub id: i64,
    pub nome: String,
    pub descricao: Option<String>,
    pub categoria: Option<String>,
    pub preco: Decimal,
    pub preco_formatado: String,
    pub quantidade: i32,
    pub minimo: i32,
    pub estoque_status: EstoqueStatus,
    pub fornecedor: Option<String>,
    pub status: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<Produto> for ProdutoView {
    fn from(p: Produto) -> Self {
        Self {
            preco_formatado: formatar_preco(p.preco),
            estoque_status: EstoqueStatus::de(p.quantidade, p.minimo),
            id: p.id,
            nome: p.nome,
            descricao: p.descricao,
            categoria: p.categoria,
            preco: p.preco,
            quantidade: p.quantidade,
            minimo: p.minimo,
            fornecedor: p.fornecedor,
            status: p.status,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProdutosResponse {
    pub success: bool,
    pub total: usize,
    pub produtos: Vec<ProdutoView>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProdutoResponse {
    pub success: bool,
    pub produto: ProdutoView,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriasResponse {
    pub success: bool,
    pub categorias: Vec<String>,
}
