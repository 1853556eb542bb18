use serde::Deserialize;
use validator::Validate;

use crate::models::VehicleStatus;

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub call_sign: String,

    #[validate(length(min = 1, max = 50))]
    pub license: String,

    #[serde(default)]
    pub status: VehicleStatus,
}

// Request para actualizar un vehículo (merge superficial)
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub call_sign: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub license: Option<String>,

    pub status: Option<VehicleStatus>,
}
