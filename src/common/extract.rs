// src/common/extract.rs

use axum::{extract::Path, Json};
use axum_extra::extract::WithRejection;

use crate::common::error::AppError;

// Extratores cuja rejeição sai no envelope de erro da API, não em texto puro
pub type JsonBody<T> = WithRejection<Json<T>, AppError>;
pub type PathParam<T> = WithRejection<Path<T>, AppError>;
