use serde::Deserialize;
use validator::Validate;

fn default_true() -> bool {
    true
}

/// Request para crear un efectivo
///
/// `vehicle_id`/`slot_number` solo se usan para datos de arranque: permiten
/// crear un efectivo ya sentado. El flujo normal asienta vía
/// `/api/assignments/vehicle`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOfficerRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 50))]
    pub badge: String,

    #[validate(length(min = 1, max = 5))]
    pub initials: String,

    #[serde(default = "default_true")]
    pub is_available: bool,

    #[serde(default)]
    pub is_corg: bool,

    pub vehicle_id: Option<i32>,

    #[validate(range(min = 1, max = 2))]
    pub slot_number: Option<i32>,
}

/// Request para actualizar un efectivo (merge superficial)
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOfficerRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub badge: Option<String>,

    #[validate(length(min = 1, max = 5))]
    pub initials: Option<String>,

    pub is_available: Option<bool>,

    pub is_corg: Option<bool>,

    #[serde(default, deserialize_with = "super::double_option")]
    pub vehicle_id: Option<Option<i32>>,

    #[validate(range(min = 1, max = 2))]
    #[serde(default, deserialize_with = "super::double_option")]
    pub slot_number: Option<Option<i32>>,
}
