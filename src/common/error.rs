// src/common/error.rs

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

// Todo erro da API sai no envelope { success: false, error, details? }.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("{0}")]
    BadRequest(String),

    #[error("Corpo da requisição inválido")]
    InvalidJson(#[from] JsonRejection),

    #[error("Parâmetro de rota inválido")]
    InvalidPath(#[from] PathRejection),

    #[error("{0}")]
    NotFound(String),

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Corpo da requisição excede o limite permitido")]
    PayloadTooLarge,

    // Falha ao retirar uma conexão da pool antes de chegar na rota
    #[error("Erro de conexão com o banco de dados")]
    ConnectionUnavailable(#[source] sqlx::Error),

    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Erro de banco com a mensagem própria da rota
    #[error("{message}")]
    DatabaseContext {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::BadRequest(_)
            | AppError::InvalidJson(_)
            | AppError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::ConnectionUnavailable(_)
            | AppError::DatabaseError(_)
            | AppError::DatabaseContext { .. }
            | AppError::InternalServerError(_)
            | AppError::BcryptError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // Mensagem do driver. Só vai para o cliente em builds de debug.
    fn internal_details(&self) -> Option<String> {
        let detail = match self {
            AppError::ConnectionUnavailable(e)
            | AppError::DatabaseError(e)
            | AppError::DatabaseContext { source: e, .. } => e.to_string(),
            AppError::InternalServerError(e) => format!("{e:#}"),
            AppError::BcryptError(e) => e.to_string(),
            _ => return None,
        };
        Some(detail)
    }
}

fn validation_details(errors: &validator::ValidationErrors) -> Value {
    let mut details = serde_json::Map::new();
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        details.insert(field.to_string(), json!(messages));
    }
    Value::Object(details)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            AppError::ValidationError(errors) => json!({
                "success": false,
                "error": "Um ou mais campos são inválidos.",
                "details": validation_details(errors),
            }),
            AppError::InvalidJson(rejection) => json!({
                "success": false,
                "error": self.to_string(),
                "details": rejection.body_text(),
            }),
            AppError::InvalidPath(rejection) => json!({
                "success": false,
                "error": self.to_string(),
                "details": rejection.body_text(),
            }),
            AppError::BadRequest(msg) | AppError::NotFound(msg) => json!({
                "success": false,
                "error": msg,
            }),
            AppError::InvalidCredentials => json!({
                "success": false,
                "error": "E-mail ou senha inválidos.",
            }),
            AppError::PayloadTooLarge => json!({
                "success": false,
                "error": self.to_string(),
            }),
            e => {
                let details = e.internal_details();
                tracing::error!("Erro Interno do Servidor: {} ({})", e, details.as_deref().unwrap_or("-"));

                let mut body = json!({ "success": false, "error": e.to_string() });
                if cfg!(debug_assertions) {
                    if let Some(details) = details {
                        body["details"] = json!(details);
                    }
                }
                body
            }
        };

        (status, Json(body)).into_response()
    }
}
