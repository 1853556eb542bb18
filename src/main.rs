use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use dotenvy::dotenv;
use patrol_dispatch::config::environment::EnvironmentConfig;
use patrol_dispatch::create_app;
use patrol_dispatch::state::AppState;
use patrol_dispatch::storage::MemStorage;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚔 Patrol Dispatch - Tableau de déploiement");
    info!("===========================================");

    let config = EnvironmentConfig::default();

    // Store en memoria, opcionalmente con el fixture de demostración
    let mut store = MemStorage::new();
    if config.seed_demo_data {
        store.seed_demo_data();
        info!("📦 Datos de demostración cargados (4 vehículos, 6 efectivos)");
    }

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(store, config);
    let app = create_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /api/health - Health check");
    info!("👮 Efectivos:");
    info!("   GET    /api/officers - Listar efectivos");
    info!("   POST   /api/officers - Crear efectivo");
    info!("   GET    /api/officers/:id - Obtener efectivo");
    info!("   PATCH  /api/officers/:id - Actualizar efectivo");
    info!("   DELETE /api/officers/:id - Eliminar efectivo");
    info!("🚗 Vehículos:");
    info!("   GET    /api/vehicles - Listar vehículos");
    info!("   POST   /api/vehicles - Crear vehículo");
    info!("   GET    /api/vehicles/:id - Obtener vehículo");
    info!("   PATCH  /api/vehicles/:id - Actualizar vehículo");
    info!("   DELETE /api/vehicles/:id - Eliminar vehículo");
    info!("📻 Asignaciones:");
    info!("   POST   /api/assignments/vehicle - Asentar efectivo en vehículo");
    info!("   DELETE /api/assignments/vehicle/:officerId - Bajar efectivo");
    info!("   POST   /api/assignments/corg - Designar CORG");
    info!("   DELETE /api/assignments/corg - Retirar CORG");
    info!("   GET    /api/assignments/corg - CORG vigente");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                anyhow::Error::from(e)
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
