// src/models/funcionario.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{mysql::MySqlRow, FromRow};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::common::db_utils::{coluna, coluna_obrigatoria};

/// Valor que o app manda no campo de senha quando ela não foi alterada.
pub const SENHA_NAO_ALTERADA: &str = "•••••••";

// Linha da tabela 'funcionarios', já com as colunas de caixa dupla resolvidas
#[derive(Debug, Clone)]
pub struct Funcionario {
    pub id: i64,
    pub nome: Option<String>,
    pub nome_completo: Option<String>,
    pub email: Option<String>,
    pub senha: Option<String>,
    pub telefone: Option<String>,
    pub cargo: Option<String>,
    pub departamento: Option<String>,
    pub data_admissao: Option<NaiveDate>,
    pub foto_perfil: Option<String>,
}

impl<'r> FromRow<'r, MySqlRow> for Funcionario {
    fn from_row(row: &'r MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: coluna_obrigatoria(row, &["id"])?,
            nome: coluna(row, &["nome"])?,
            nome_completo: coluna(row, &["NomeCompleto", "nome_completo"])?,
            email: coluna(row, &["email"])?,
            senha: coluna(row, &["senha"])?,
            telefone: coluna(row, &["Telefone"])?,
            cargo: coluna(row, &["Cargo"])?,
            departamento: coluna(row, &["Departamento"])?,
            data_admissao: coluna(row, &["DataAdmissao", "data_admissao"])?,
            foto_perfil: coluna(row, &["FotoPerfil", "foto_perfil"])?,
        })
    }
}

/// Funcionário como sai na API: sem senha e com as duas grafias de cada
/// campo legado, porque versões antigas do app leem `Nome`, `Telefone` etc.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FuncionarioPublico {
    pub id: i64,
    pub nome: Option<String>,
    #[serde(rename = "Nome")]
    pub nome_legado: Option<String>,
    #[serde(rename = "nomeCompleto")]
    pub nome_completo: Option<String>,
    #[serde(rename = "NomeCompleto")]
    pub nome_completo_legado: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    #[serde(rename = "Telefone")]
    pub telefone_legado: Option<String>,
    pub cargo: Option<String>,
    #[serde(rename = "Cargo")]
    pub cargo_legado: Option<String>,
    pub departamento: Option<String>,
    #[serde(rename = "Departamento")]
    pub departamento_legado: Option<String>,
    #[serde(rename = "dataAdmissao")]
    pub data_admissao: Option<NaiveDate>,
    #[serde(rename = "DataAdmissao")]
    pub data_admissao_legado: Option<NaiveDate>,
    #[serde(rename = "fotoPerfil")]
    pub foto_perfil: Option<String>,
    #[serde(rename = "FotoPerfil")]
    pub foto_perfil_legado: Option<String>,
}

impl From<Funcionario> for FuncionarioPublico {
    fn from(f: Funcionario) -> Self {
        Self {
            id: f.id,
            nome_legado: f.nome.clone(),
            nome: f.nome,
            nome_completo_legado: f.nome_completo.clone(),
            nome_completo: f.nome_completo,
            email: f.email,
            telefone_legado: f.telefone.clone(),
            telefone: f.telefone,
            cargo_legado: f.cargo.clone(),
            cargo: f.cargo,
            departamento_legado: f.departamento.clone(),
            departamento: f.departamento,
            data_admissao_legado: f.data_admissao,
            data_admissao: f.data_admissao,
            foto_perfil_legado: f.foto_perfil.clone(),
            foto_perfil: f.foto_perfil,
        }
    }
}

pub fn validar_foto(foto: &str) -> Result<(), ValidationError> {
    if !foto.starts_with("data:image/") {
        let mut err = ValidationError::new("formato_imagem");
        err.message = Some("Formato de imagem inválido".into());
        return Err(err);
    }
    Ok(())
}

// ---
// Payload: atualização total ou parcial do funcionário
// ---
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AtualizarFuncionarioPayload {
    #[serde(alias = "Nome")]
    pub nome: Option<String>,

    #[serde(alias = "NomeCompleto")]
    pub nome_completo: Option<String>,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,

    pub senha: Option<String>,

    #[serde(alias = "Telefone")]
    pub telefone: Option<String>,

    #[serde(alias = "Cargo")]
    pub cargo: Option<String>,

    #[serde(alias = "Departamento")]
    pub departamento: Option<String>,

    #[serde(alias = "FotoPerfil")]
    #[validate(custom(function = "validar_foto"))]
    pub foto_perfil: Option<String>,
}

fn preenchido(valor: Option<String>) -> Option<String> {
    valor.filter(|v| !v.trim().is_empty())
}

impl AtualizarFuncionarioPayload {
    /// Descarta campos vazios e a senha-sentinela antes de validar.
    pub fn normalizado(self) -> Self {
        Self {
            nome: preenchido(self.nome),
            nome_completo: preenchido(self.nome_completo),
            email: preenchido(self.email).map(|e| e.trim().to_string()),
            senha: preenchido(self.senha).filter(|s| s != SENHA_NAO_ALTERADA),
            telefone: preenchido(self.telefone),
            cargo: preenchido(self.cargo),
            departamento: preenchido(self.departamento),
            foto_perfil: preenchido(self.foto_perfil),
        }
    }

    /// Pares (coluna, valor) que entram no UPDATE, na ordem da tabela.
    pub fn alteracoes(&self) -> Vec<(&'static str, &str)> {
        [
            ("nome", &self.nome),
            ("NomeCompleto", &self.nome_completo),
            ("email", &self.email),
            ("senha", &self.senha),
            ("Telefone", &self.telefone),
            ("Cargo", &self.cargo),
            ("Departamento", &self.departamento),
            ("FotoPerfil", &self.foto_perfil),
        ]
        .into_iter()
        .filter_map(|(col, valor)| valor.as_deref().map(|v| (col, v)))
        .collect()
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AtualizarFotoPayload {
    #[serde(alias = "FotoPerfil")]
    pub foto_perfil: Option<String>,
}

// Dados para login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginPayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "O e-mail é obrigatório."))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "A senha é obrigatória."))]
    pub senha: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckEmailPayload {
    // Consulta simples: qualquer texto é buscado como está
    #[serde(default)]
    #[validate(length(min = 1, message = "O e-mail é obrigatório."))]
    pub email: String,
    pub exclude_id: Option<i64>,
}

// --- Respostas ---

#[derive(Debug, Serialize, ToSchema)]
pub struct FuncionarioResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub funcionario: FuncionarioPublico,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FuncionariosResponse {
    pub success: bool,
    pub funcionarios: Vec<FuncionarioPublico>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub usuario: FuncionarioPublico,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckEmailResponse {
    pub success: bool,
    pub exists: bool,
}
