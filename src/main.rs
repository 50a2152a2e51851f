use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use limo_reservations::config::database::DatabaseConfig;
use limo_reservations::config::environment::EnvironmentConfig;
use limo_reservations::routes::create_router;
use limo_reservations::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("👑 American Royalty - Servicio de Reservas");
    info!("==========================================");

    let config = EnvironmentConfig::default();

    // Pool lazy: el servidor arranca aunque el almacén no responda y el
    // catálogo público sirve fixtures mientras tanto
    let pool = match DatabaseConfig::default().create_pool() {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error configurando el pool de base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_router(AppState::new(pool, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints públicos:");
    info!("   GET  /health - Health check");
    info!("   POST /api/quotes - Solicitud de presupuesto");
    info!("   POST /api/contact - Mensaje de contacto");
    info!("   GET  /api/fleet - Catálogo de flota");
    info!("   GET  /api/fleet/:slug - Detalle de vehículo");
    info!("   GET  /api/services - Catálogo de servicios");
    info!("   GET  /api/services/:slug - Detalle de servicio");
    info!("   GET  /api/testimonials - Testimonios (?featured=true)");
    info!("   POST /api/auth/login - Login admin");
    info!("📋 Endpoints admin - Quotes:");
    info!("   GET  /api/admin/quotes - Bandeja de solicitudes");
    info!("   GET  /api/admin/quotes/:id - Detalle");
    info!("   PATCH /api/admin/quotes/:id - Patch del ciclo de vida");
    info!("   POST /api/admin/quotes/:id/convert - Convertir en reserva");
    info!("   POST /api/admin/quotes/:id/contacted - Marcar contactada");
    info!("   POST /api/admin/quotes/:id/send - Enviar presupuesto");
    info!("   POST /api/admin/quotes/:id/cancel - Cancelar");
    info!("🚐 Endpoints admin - Bookings:");
    info!("   GET  /api/admin/bookings - Listado de reservas");
    info!("   POST /api/admin/bookings - Creación directa");
    info!("   PUT  /api/admin/bookings/:id/status - Cambio de estado");
    info!("🚗 Endpoints admin - Fleet:");
    info!("   GET  /api/admin/fleet - Toda la flota");
    info!("   POST /api/admin/fleet - Alta de vehículo");
    info!("   PUT  /api/admin/fleet/:id - Actualizar vehículo");
    info!("   DELETE /api/admin/fleet/:id - Eliminar vehículo");
    info!("   PUT  /api/admin/fleet/reorder - Reordenar catálogo");
    info!("   GET  /api/admin/fleet/names - Mapa id -> nombre");
    info!("⭐ Endpoints admin - Testimonials:");
    info!("   GET  /api/admin/testimonials - Listado completo");
    info!("   POST /api/admin/testimonials - Alta");
    info!("   PATCH /api/admin/testimonials/:id - Patch");
    info!("   DELETE /api/admin/testimonials/:id - Borrado");
    info!("🖼️ Endpoints admin - Uploads:");
    info!("   POST /api/admin/upload - Subida de imagen de flota");
    info!("📊 Endpoints admin - Dashboard:");
    info!("   GET  /api/admin/dashboard - Agregados del pipeline");
    info!("   GET  /api/admin/dashboard/recent-quotes - Últimas solicitudes");
    info!("   GET  /api/admin/dashboard/upcoming-bookings - Próximas reservas");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor detenido");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("🛑 Ctrl+C recibido, cerrando"),
        _ = terminate => info!("🛑 SIGTERM recibido, cerrando"),
    }
}
