// src/middleware/logging.rs

use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde_json::Value;

use crate::{common::error::AppError, config::AppState};

const CAMPOS_FOTO: [&str; 2] = ["fotoPerfil", "FotoPerfil"];
const LIMITE_FOTO_NO_LOG: usize = 100;

// Loga método, URI e corpo JSON de cada requisição
pub async fn log_request(
    State(app_state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (parts, body) = request.into_parts();

    let bytes = axum::body::to_bytes(body, app_state.json_body_limit)
        .await
        .map_err(|_| AppError::PayloadTooLarge)?;

    tracing::info!("{} {}", parts.method, parts.uri);
    if let Some(resumo) = resumir_corpo(&bytes) {
        tracing::info!("Body: {}", resumo);
    }

    let request = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(request).await)
}

/// Versão do corpo que pode ir para o log: fotos Base64 e senhas são mascaradas.
pub fn resumir_corpo(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }

    let Ok(mut json) = serde_json::from_slice::<Value>(bytes) else {
        return Some(format!("<{} bytes não-JSON>", bytes.len()));
    };

    let Some(obj) = json.as_object_mut() else {
        return Some(json.to_string());
    };
    if obj.is_empty() {
        return None;
    }

    for campo in CAMPOS_FOTO {
        if let Some(Value::String(foto)) = obj.get_mut(campo) {
            if foto.len() > LIMITE_FOTO_NO_LOG {
                *foto = "BASE64_IMAGE_DATA".to_string();
            }
        }
    }
    if let Some(senha) = obj.get_mut("senha") {
        *senha = Value::String("***".to_string());
    }

    Some(json.to_string())
}
