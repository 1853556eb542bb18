//! DTOs de la API
//!
//! Requests de creación y de actualización parcial. Los PATCH usan structs de
//! parche explícitos: `Option<T>` distingue "campo ausente" (se preserva) y,
//! para los campos anulables, `Option<Option<T>>` distingue además
//! "campo: null" (se limpia).

pub mod assignment_dto;
pub mod officer_dto;
pub mod vehicle_dto;

use serde::{Deserialize, Deserializer};

/// Deserializador para campos anulables de un parche: un `null` explícito
/// llega como `Some(None)` en lugar de perderse como `None`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
