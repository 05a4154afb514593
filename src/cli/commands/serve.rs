use crate::config;

pub async fn handle(port: Option<u16>) -> anyhow::Result<()> {
    let mut config = config::config().clone();
    if let Some(port) = port {
        config.api.port = port;
    }

    tracing::info!("Starting Pizza API in {:?} mode", config.environment);
    crate::serve(&config).await
}
