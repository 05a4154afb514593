use pizza_api::config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DB_URI, PORT, etc.
    let _ = dotenvy::dotenv();

    pizza_api::init_tracing();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting Pizza API in {:?} mode", config.environment);

    pizza_api::serve(config).await
}
