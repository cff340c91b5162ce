use dotenvy::dotenv;
use product_crud::{api, config, errors::Result};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also be set externally
    dotenv().ok();

    // 3. Load the application configuration
    let app_config = config::app::load_app_configuration()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    // 4. Connect and make sure the product table exists
    let db = config::database::create_connection(&app_config.database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    config::database::create_tables(&db)
        .await
        .inspect(|()| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 5. Serve the API
    let app = api::router(Arc::new(db), &app_config.cors_origins);
    let listener = tokio::net::TcpListener::bind(app_config.bind_addr)
        .await
        .inspect_err(|e| error!("Failed to bind {}: {}", app_config.bind_addr, e))?;
    info!("Listening on {}", app_config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
