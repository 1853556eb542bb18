//! Patrol Dispatch - tablero de despacho de patrullas
//!
//! API REST sobre un store en memoria: efectivos, vehículos de patrulla y sus
//! asignaciones en tiempo real (asiento en vehículo o rol de coordinador).
//! El router completo se arma en [`create_app`] para que los tests de
//! integración levanten exactamente la misma app que `main`.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use middleware::cors::cors_middleware;
use state::AppState;

/// Arma el router completo de la aplicación
pub fn create_app(app_state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_endpoint))
        .nest("/api/officers", routes::officer_routes::create_officer_router())
        .nest("/api/vehicles", routes::vehicle_routes::create_vehicle_router())
        .nest(
            "/api/assignments",
            routes::assignment_routes::create_assignment_router(),
        )
        .layer(cors_middleware())
        .with_state(app_state)
}

/// Endpoint de salud simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "patrol-dispatch",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
