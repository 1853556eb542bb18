use std::sync::Arc;

use tokio::sync::RwLock;
use validator::Validate;

use crate::dto::assignment_dto::{AssignCorgRequest, AssignVehicleRequest};
use crate::models::Officer;
use crate::services::assignment_service;
use crate::storage::MemStorage;
use crate::utils::errors::AppResult;

/// Puente entre las rutas de asignación y el motor de reglas.
///
/// Cada operación mutante toma el write lock del store completo y lo retiene
/// hasta terminar: ese es el punto de serialización que preserva los
/// invariantes de slot único y CORG único bajo requests concurrentes.
pub struct AssignmentController {
    store: Arc<RwLock<MemStorage>>,
}

impl AssignmentController {
    pub fn new(store: Arc<RwLock<MemStorage>>) -> Self {
        Self { store }
    }

    pub async fn assign_vehicle(&self, request: AssignVehicleRequest) -> AppResult<Officer> {
        request.validate()?;
        let mut store = self.store.write().await;
        assignment_service::assign_officer_to_vehicle(
            &mut store,
            request.officer_id,
            request.vehicle_id,
            request.slot_number,
        )
    }

    pub async fn remove_vehicle(&self, officer_id: i32) -> AppResult<Officer> {
        let mut store = self.store.write().await;
        assignment_service::remove_officer_from_vehicle(&mut store, officer_id)
    }

    pub async fn assign_corg(&self, request: AssignCorgRequest) -> AppResult<Officer> {
        let mut store = self.store.write().await;
        assignment_service::assign_corg(&mut store, request.officer_id)
    }

    pub async fn remove_corg(&self) {
        let mut store = self.store.write().await;
        assignment_service::remove_corg(&mut store);
    }

    pub async fn get_corg(&self) -> Option<Officer> {
        let store = self.store.read().await;
        assignment_service::corg(&store)
    }
}
