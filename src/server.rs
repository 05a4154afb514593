//! Router construction and the HTTP server loop.

use anyhow::Context;
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::database::DatabaseManager;
use crate::handlers;
use crate::state::AppState;

/// Build the router with every route and the middleware the config enables
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let router = Router::new()
        // Public
        .route("/", get(handlers::public::root))
        .route("/health", get(handlers::public::health))
        .merge(restaurant_routes())
        .merge(pizza_routes())
        .merge(restaurant_pizza_routes())
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes));

    let router = if config.security.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    if config.api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

fn restaurant_routes() -> Router<AppState> {
    use handlers::restaurants;

    Router::new()
        .route("/restaurants", get(restaurants::restaurant_list))
        .route(
            "/restaurants/:id",
            get(restaurants::restaurant_show).delete(restaurants::restaurant_delete),
        )
}

fn pizza_routes() -> Router<AppState> {
    use handlers::pizzas;

    Router::new().route("/pizzas", get(pizzas::pizza_list))
}

fn restaurant_pizza_routes() -> Router<AppState> {
    use axum::routing::post;
    use handlers::restaurant_pizzas;

    Router::new().route(
        "/restaurant_pizzas",
        post(restaurant_pizzas::restaurant_pizza_create),
    )
}

/// Open the database, then serve until Ctrl+C or SIGTERM
pub async fn serve(config: &AppConfig) -> anyhow::Result<()> {
    let pool = DatabaseManager::connect_and_migrate(&config.database)
        .await
        .context("failed to prepare database")?;

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("Pizza API listening on http://{} ({:?})", bind_addr, config.environment);

    let router = app(AppState::new(pool.clone()), config);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    DatabaseManager::close(pool).await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
