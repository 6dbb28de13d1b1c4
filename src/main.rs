use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};
use dotenvy::dotenv;

use urbandrive_admin::config::EnvironmentConfig;
use urbandrive_admin::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 UrbanDrive - Panel de administración");
    info!("========================================");

    let config = match EnvironmentConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Configuración inválida: {}", e);
            return Err(e.into());
        }
    };
    info!("🔧 Entorno: {}", config.environment);
    info!("🔗 API de gestión: {}", config.api_base_url);
    if config.is_production() && config.cors_origins.is_empty() {
        warn!("⚠️ CORS_ORIGINS vacío en producción: no se aceptan orígenes externos");
    }

    let app_state = match AppState::from_config(config.clone()) {
        Ok(state) => state,
        Err(e) => {
            error!("❌ Error creando el cliente de la API de gestión: {}", e);
            return Err(anyhow::anyhow!("Error de configuración: {}", e));
        }
    };

    let app = create_router(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Estado del servidor");
    info!("🔐 Acceso:");
    info!("   POST /login - Iniciar sesión");
    info!("   POST /registro - Registro público de clientes");
    info!("🛠️ Administración (rol Admin):");
    info!("   GET  /admin - Panel");
    info!("   GET  /admin/vehiculos - Listar vehículos");
    info!("   GET|POST /admin/vehiculos/nuevo - Crear vehículo");
    info!("   GET|POST /admin/vehiculos/:id/editar - Editar vehículo");
    info!("   POST /admin/vehiculos/:id/eliminar - Eliminar vehículo");
    info!("   GET  /admin/usuarios - Listar usuarios (mismas acciones)");
    info!("   GET  /admin/reservas - Listar reservas (mismas acciones)");
    info!("   POST /admin/reservas/:id/cambiar-estado - Cambiar estado");
    info!("   GET  /admin/facturas - Listar facturas");
    info!("   GET|POST /admin/facturas/nueva?idReserva= - Crear factura");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo escuchar Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el manejador de señales: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
