use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use common::database::{health_check, init_pool};
use flights::{
    AppState,
    config::{AppConfig, StorageBackend},
    repositories::{FlightRepository, InMemoryFlightRepository, PgFlightRepository},
    routes,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting flights service");

    let config = AppConfig::load()?;

    let repository: Arc<dyn FlightRepository> = match config.storage {
        StorageBackend::Postgres => {
            // Initialize database connection pool
            let pool = init_pool(&config.database_config()).await?;

            // Check database connectivity
            if health_check(&pool).await? {
                info!("Database connection successful");
            } else {
                anyhow::bail!("Failed to connect to database");
            }

            Arc::new(PgFlightRepository::new(pool))
        }
        StorageBackend::Memory => {
            warn!("Using in-memory flight storage, data is lost on restart");
            Arc::new(InMemoryFlightRepository::new())
        }
    };

    let app = routes::create_router(AppState::new(repository));

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Flights service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
