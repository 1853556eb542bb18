//! Controllers del patrón MVC
//!
//! Se construyen por request con el handle al store compartido.

pub mod assignment_controller;
pub mod officer_controller;
pub mod vehicle_controller;
