use axum::{
    extract::{Path, State},
    routing::{delete, get, patch, post},
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::Vehicle;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::AppJson;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/", post(create_vehicle))
        .route("/:id", get(get_vehicle))
        .route("/:id", patch(update_vehicle))
        .route("/:id", delete(delete_vehicle))
}

async fn list_vehicles(State(state): State<AppState>) -> Json<Vec<Vehicle>> {
    let controller = VehicleController::new(state.store.clone());
    Json(controller.list().await)
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vehicle>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    let vehicle = controller.get_by_id(id).await?;
    Ok(Json(vehicle))
}

async fn create_vehicle(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateVehicleRequest>,
) -> Result<Json<Vehicle>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    let vehicle = controller.create(request).await?;
    Ok(Json(vehicle))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(request): AppJson<UpdateVehicleRequest>,
) -> Result<Json<Vehicle>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    let vehicle = controller.update(id, request).await?;
    Ok(Json(vehicle))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Json<serde_json::Value> {
    let controller = VehicleController::new(state.store.clone());
    controller.delete(id).await;
    Json(serde_json::json!({ "success": true }))
}
