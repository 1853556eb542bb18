//! Shared application state
//!
//! Estado compartido que Axum clona hacia cada handler. El store vive detrás
//! de un único `RwLock`: las lecturas van en paralelo y cada mutación retiene
//! el write lock de punta a punta, que es lo que serializa las operaciones
//! del motor de asignación.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::environment::EnvironmentConfig;
use crate::storage::MemStorage;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<MemStorage>>,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(store: MemStorage, config: EnvironmentConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config,
        }
    }
}
