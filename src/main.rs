use gameplan::{config::AuthConfig, db::Database, routes, state::AppState};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 0. Load .env file immediately
    // Uses dotenvy which is just dotenv but maintained. Silently ignores if no .env exists.
    dotenvy::dotenv().ok();

    // 1. Initialize Sentry (if configured)
    // This guard must be kept in scope for Sentry to work
    let _guard = sentry::init((std::env::var("SENTRY_DSN").ok(), sentry::ClientOptions {
        release: sentry::release_name!(),
        traces_sample_rate: 1.0,
        ..Default::default()
    }));

    // 2. Initialize logging
    // Uses tracing for structured logs. Respects RUST_LOG env var.
    // Defaults to debug level for gameplan and tower_http so you can see what's happening.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "gameplan=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer()) // Sentry integration
        .init();

    tracing::info!("Starting GamePlan API...");

    // 3. Build the explicit dependencies: config first (panics early if
    // JWT_SECRET is missing — better now than on the first login), then the
    // store. No process-wide globals; everything rides in AppState.
    let auth = AuthConfig::from_env();
    let db = Database::new();

    let state = AppState { db, auth };
    let app = routes::create_routes(state);

    // 4. Start the server
    // Listens on PORT env var (defaults to 3000).
    // 0.0.0.0 so it binds to all interfaces (necessary in Docker).
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = SocketAddr::from(([0, 0, 0, 0], port.parse()?));

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
