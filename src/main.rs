use heritage_ar_api::generator::ContentGenerator;
use heritage_ar_api::state::AppState;
use heritage_ar_api::{app, config, database};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, GEMINI_API_KEY, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!(
        "Starting Heritage AR API in {:?} mode ({:?} schema variant)",
        config.environment,
        config.schema_variant
    );

    let pool = database::connect()
        .await
        .unwrap_or_else(|e| panic!("failed to connect database: {}", e));

    database::init_schema(&pool, config.schema_variant)
        .await
        .unwrap_or_else(|e| panic!("failed to initialize schema: {}", e));

    let generator = ContentGenerator::new(config.generator.clone())
        .unwrap_or_else(|e| panic!("failed to build content generator: {}", e));

    let state = AppState::new(pool, generator);
    let app = app(state, config.schema_variant);

    // Allow tests or deployments to override port via env
    let port = std::env::var("HERITAGE_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Heritage AR API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
