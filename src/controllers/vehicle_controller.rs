use std::sync::Arc;

use tokio::sync::RwLock;
use validator::Validate;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::Vehicle;
use crate::storage::MemStorage;
use crate::utils::errors::{AppError, AppResult};

pub struct VehicleController {
    store: Arc<RwLock<MemStorage>>,
}

impl VehicleController {
    pub fn new(store: Arc<RwLock<MemStorage>>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<Vehicle> {
        self.store.read().await.vehicles()
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Vehicle> {
        self.store
            .read()
            .await
            .vehicle(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Vehicle with id {} not found", id)))
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> AppResult<Vehicle> {
        request.validate()?;
        Ok(self.store.write().await.create_vehicle(request))
    }

    pub async fn update(&self, id: i32, request: UpdateVehicleRequest) -> AppResult<Vehicle> {
        request.validate()?;
        self.store.write().await.update_vehicle(id, request)
    }

    pub async fn delete(&self, id: i32) {
        self.store.write().await.delete_vehicle(id);
    }
}
