use anyhow::Context;
use chrono::Utc;
use storage::Database;
use web::{AppState, config::Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting SRAM API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let reference_date = config
        .seed_reference_date
        .unwrap_or_else(|| Utc::now().date_naive());
    tracing::info!("Seeding demo data relative to {}", reference_date);
    let db = Database::seeded(reference_date);

    tracing::info!("Session user is {}", config.session_user_id);
    let state = AppState::new(db, config.session_user_id.clone());

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, web::app(state))
        .await
        .context("Server error")?;

    Ok(())
}
