//! Modelo de Officer
//!
//! Un efectivo del tablero de despacho. En todo momento ocupa exactamente uno
//! de tres estados: disponible, sentado en un vehículo (slot 1 o 2), o
//! coordinador (CORG). Los campos de asignación son referencias tipo foreign
//! key sobre el propio registro; no existe una entidad de asignación aparte.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Officer {
    pub id: i32,
    pub name: String,
    pub badge: String,
    pub initials: String,
    pub is_available: bool,
    pub is_corg: bool,
    pub vehicle_id: Option<i32>,
    pub slot_number: Option<i32>,
}

impl Officer {
    /// ¿Ocupa este par (vehículo, slot)?
    pub fn seated_in(&self, vehicle_id: i32, slot_number: i32) -> bool {
        self.vehicle_id == Some(vehicle_id) && self.slot_number == Some(slot_number)
    }
}
