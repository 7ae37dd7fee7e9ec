use actix_web::{App, HttpServer};
use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bulletin::config::Config;
use bulletin::middleware::RequestId;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bulletin=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Starting Bulletin Community Board");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool and apply schema
    let pool = config
        .database
        .create_pool()
        .await
        .context("Failed to create database pool")?;

    bulletin::MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!(
        "Database ready ({} max connections)",
        config.database.max_connections
    );

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let pool = pool.clone();
        App::new()
            .wrap(RequestId)
            .configure(move |cfg| bulletin::configure_app(cfg, pool.clone()))
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;

    Ok(())
}
