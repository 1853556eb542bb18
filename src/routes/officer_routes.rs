use axum::{
    extract::{Path, State},
    routing::{delete, get, patch, post},
    Json, Router,
};

use crate::controllers::officer_controller::OfficerController;
use crate::dto::officer_dto::{CreateOfficerRequest, UpdateOfficerRequest};
use crate::models::Officer;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::AppJson;

pub fn create_officer_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_officers))
        .route("/", post(create_officer))
        .route("/:id", get(get_officer))
        .route("/:id", patch(update_officer))
        .route("/:id", delete(delete_officer))
}

async fn list_officers(State(state): State<AppState>) -> Json<Vec<Officer>> {
    let controller = OfficerController::new(state.store.clone());
    Json(controller.list().await)
}

async fn get_officer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Officer>, AppError> {
    let controller = OfficerController::new(state.store.clone());
    let officer = controller.get_by_id(id).await?;
    Ok(Json(officer))
}

async fn create_officer(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateOfficerRequest>,
) -> Result<Json<Officer>, AppError> {
    let controller = OfficerController::new(state.store.clone());
    let officer = controller.create(request).await?;
    Ok(Json(officer))
}

async fn update_officer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(request): AppJson<UpdateOfficerRequest>,
) -> Result<Json<Officer>, AppError> {
    let controller = OfficerController::new(state.store.clone());
    let officer = controller.update(id, request).await?;
    Ok(Json(officer))
}

async fn delete_officer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Json<serde_json::Value> {
    let controller = OfficerController::new(state.store.clone());
    controller.delete(id).await;
    Json(serde_json::json!({ "success": true }))
}
