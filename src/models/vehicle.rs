//! Modelo de Vehicle
//!
//! Vehículo de patrulla con dos asientos (slot 1 y slot 2). El estado es una
//! etiqueta operativa de una enumeración fija; NO se valida contra la
//! ocupación de asientos (un vehículo vacío puede estar "En Patrouille").

use serde::{Deserialize, Serialize};

/// Número de asientos por vehículo (slot 1 y slot 2)
pub const SEATS_PER_VEHICLE: i32 = 2;

/// Estado operativo del vehículo - literales exactos del protocolo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    #[serde(rename = "Disponible")]
    Disponible,
    #[serde(rename = "En Patrouille")]
    EnPatrouille,
    #[serde(rename = "En Intervention")]
    EnIntervention,
    /// Modo de vigilancia especial
    #[serde(rename = "ASL")]
    Asl,
    #[serde(rename = "Hors Service")]
    HorsService,
}

impl Default for VehicleStatus {
    fn default() -> Self {
        VehicleStatus::Disponible
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: i32,
    pub call_sign: String,
    pub license: String,
    pub status: VehicleStatus,
}
