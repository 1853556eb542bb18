//! Routers de la API REST

pub mod assignment_routes;
pub mod officer_routes;
pub mod vehicle_routes;
