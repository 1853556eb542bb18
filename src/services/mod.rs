//! Lógica de negocio del tablero

pub mod assignment_service;
