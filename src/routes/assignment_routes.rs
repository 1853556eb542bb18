use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};

use crate::controllers::assignment_controller::AssignmentController;
use crate::dto::assignment_dto::{AssignCorgRequest, AssignVehicleRequest};
use crate::models::Officer;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::AppJson;

pub fn create_assignment_router() -> Router<AppState> {
    Router::new()
        .route("/vehicle", post(assign_vehicle))
        .route("/vehicle/:officer_id", delete(remove_vehicle))
        .route("/corg", post(assign_corg))
        .route("/corg", delete(remove_corg))
        .route("/corg", get(get_corg))
}

async fn assign_vehicle(
    State(state): State<AppState>,
    AppJson(request): AppJson<AssignVehicleRequest>,
) -> Result<Json<Officer>, AppError> {
    let controller = AssignmentController::new(state.store.clone());
    let officer = controller.assign_vehicle(request).await?;
    Ok(Json(officer))
}

async fn remove_vehicle(
    State(state): State<AppState>,
    Path(officer_id): Path<i32>,
) -> Result<Json<Officer>, AppError> {
    let controller = AssignmentController::new(state.store.clone());
    let officer = controller.remove_vehicle(officer_id).await?;
    Ok(Json(officer))
}

async fn assign_corg(
    State(state): State<AppState>,
    AppJson(request): AppJson<AssignCorgRequest>,
) -> Result<Json<Officer>, AppError> {
    let controller = AssignmentController::new(state.store.clone());
    let officer = controller.assign_corg(request).await?;
    Ok(Json(officer))
}

/// Nunca falla: retirar un rol vacante también es éxito.
async fn remove_corg(State(state): State<AppState>) -> Json<serde_json::Value> {
    let controller = AssignmentController::new(state.store.clone());
    controller.remove_corg().await;
    Json(serde_json::json!({ "success": true }))
}

/// Devuelve el CORG vigente o `null` en el body.
async fn get_corg(State(state): State<AppState>) -> Json<Option<Officer>> {
    let controller = AssignmentController::new(state.store.clone());
    Json(controller.get_corg().await)
}
