use serde::Deserialize;
use validator::Validate;

/// Request para asentar un efectivo en un vehículo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssignVehicleRequest {
    pub officer_id: i32,
    pub vehicle_id: i32,

    #[validate(range(min = 1, max = 2))]
    pub slot_number: i32,
}

/// Request para designar al coordinador (CORG)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignCorgRequest {
    pub officer_id: i32,
}
