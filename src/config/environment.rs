//! Configuración de variables de entorno
//!
//! A diferencia de un despliegue con secretos obligatorios, acá todo tiene
//! default razonable: el servicio levanta sin ninguna variable seteada.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    /// Cargar el fixture de demostración al arrancar (4 vehículos, 6 efectivos)
    pub seed_demo_data: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
