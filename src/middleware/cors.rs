//! Middleware de CORS
//!
//! El tablero se consume desde un frontend servido aparte, así que la API
//! acepta cualquier origen.

use tower_http::cors::CorsLayer;

/// Crear middleware de CORS
/// NOTA: Permite cualquier origen - solo para desarrollo
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}
