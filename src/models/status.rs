// src/models/status.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TesteBanco {
    pub test: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TestDbResponse {
    pub success: bool,
    pub message: String,
    pub test: TesteBanco,
}

// Resposta simples: só confirma a operação
#[derive(Debug, Serialize, ToSchema)]
pub struct MensagemResponse {
    pub success: bool,
    pub message: String,
}
