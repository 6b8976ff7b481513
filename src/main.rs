use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};

use gradebook::gradebook_auth::TokenService;
use gradebook::gradebook_config::{DatabaseConfig, JwtConfig, ServerConfig};
use gradebook::gradebook_core::password::placeholder_hash;
use gradebook::gradebook_db::{MemoryUserStore, PgUserStore, UserStore, init_db_pool};
use gradebook::logging::init_tracing;
use gradebook::router::init_router;
use gradebook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let server_config = ServerConfig::from_env()?;
    let _log_guard = init_tracing(&server_config.log_dir)?;

    let jwt_config = JwtConfig::from_env().context("failed to load token signing config")?;
    let database_config = DatabaseConfig::from_env()?;

    // Unknown-account logins verify against this hash; build it before serving.
    tokio::task::spawn_blocking(placeholder_hash).await??;

    let users: Arc<dyn UserStore> = match &database_config.url {
        Some(url) => {
            let pool = init_db_pool(url, database_config.max_connections)
                .await
                .context("failed to connect to database")?;
            info!("Using PostgreSQL user store");
            Arc::new(PgUserStore::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set; using in-memory user store");
            Arc::new(MemoryUserStore::new())
        }
    };

    let state = AppState::new(users, TokenService::new(&jwt_config))
        .with_allowed_origins(server_config.allowed_origins.clone());
    let app = init_router(state)?;

    let listener = tokio::net::TcpListener::bind(server_config.bind_addr).await?;
    info!(addr = %server_config.bind_addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
