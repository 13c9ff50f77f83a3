use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use smartbus_api::{app, upstream::HttpSeatAllocator, AppState};
use smartbus_core::repository::{BookingRepository, HistoryRepository};
use smartbus_store::{
    app_config::Config, DbClient, InMemoryBookingRepository, InMemoryHistoryRepository,
};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "smartbus_api=debug,tower_http=debug,axum::rejection=trace".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    info!("Starting SmartBus relay on port {}", config.server.port);

    let (history_repo, booking_repo): (Arc<dyn HistoryRepository>, Arc<dyn BookingRepository>) =
        match DbClient::from_config(&config.database).await? {
            Some(db) => (
                Arc::new(db.history_repository()),
                Arc::new(db.booking_repository()),
            ),
            None => {
                warn!("No database configured, history and bookings are kept in memory");
                (
                    Arc::new(InMemoryHistoryRepository::new()),
                    Arc::new(InMemoryBookingRepository::new()),
                )
            }
        };

    let allocator = HttpSeatAllocator::new(
        &config.ai_service.base_url,
        config.ai_service.timeout_seconds.map(Duration::from_secs),
    )?;
    info!("Forwarding allocations to {}", allocator.allocate_url());

    let app_state = AppState {
        history_repo,
        booking_repo,
        allocator: Arc::new(allocator),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
