use disaster_report_api::{app, auth::TokenService, config, database, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, PORT.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!(
        "Starting disaster report API in {:?} mode",
        config.environment
    );

    let pool = database::connect(&config.database)?;

    // Best-effort bootstrap: the pool is lazy, so a down database should not
    // keep the public routes from serving.
    if let Err(err) = database::ensure_schema(&pool).await {
        tracing::warn!("schema bootstrap failed, continuing: {}", err);
    }

    let tokens = TokenService::new(
        config.security.jwt_secret.clone(),
        config.security.jwt_expiry_hours as i64,
    );
    let app = app(AppState::new(pool, tokens));

    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    println!("Server running on port {}", config.api.port);

    axum::serve(listener, app).await?;
    Ok(())
}
