//! Sistema de manejo de errores
//!
//! Tipos de error de la aplicación y su conversión a respuestas HTTP. El
//! contrato del tablero es un único shape de error: `{"message": string}`.
//! NotFound y SlotOccupied se mapean a 400 en toda la superficie (el frontend
//! original solo distingue 200 de no-200).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    SlotOccupied(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(e) => {
                warn!("Validation error: {}", e);
                (StatusCode::BAD_REQUEST, format!("Validation error: {}", e))
            }

            AppError::NotFound(msg) => {
                warn!("Resource not found: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }

            AppError::SlotOccupied(msg) => {
                warn!("Slot occupied: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }

            AppError::BadRequest(msg) => {
                warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }

            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;
