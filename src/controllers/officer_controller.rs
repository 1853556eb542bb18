use std::sync::Arc;

use tokio::sync::RwLock;
use validator::Validate;

use crate::dto::officer_dto::{CreateOfficerRequest, UpdateOfficerRequest};
use crate::models::Officer;
use crate::storage::MemStorage;
use crate::utils::errors::{AppError, AppResult};

pub struct OfficerController {
    store: Arc<RwLock<MemStorage>>,
}

impl OfficerController {
    pub fn new(store: Arc<RwLock<MemStorage>>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<Officer> {
        self.store.read().await.officers()
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Officer> {
        self.store
            .read()
            .await
            .officer(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Officer with id {} not found", id)))
    }

    pub async fn create(&self, request: CreateOfficerRequest) -> AppResult<Officer> {
        request.validate()?;
        Ok(self.store.write().await.create_officer(request))
    }

    pub async fn update(&self, id: i32, request: UpdateOfficerRequest) -> AppResult<Officer> {
        request.validate()?;
        self.store.write().await.update_officer(id, request)
    }

    pub async fn delete(&self, id: i32) {
        self.store.write().await.delete_officer(id);
    }
}
