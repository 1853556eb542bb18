//! Modelos del sistema
//!
//! Structs de dominio que se serializan tal cual al JSON de la API
//! (campos en camelCase, contrato original del tablero).

pub mod officer;
pub mod vehicle;

pub use officer::Officer;
pub use vehicle::{Vehicle, VehicleStatus, SEATS_PER_VEHICLE};
