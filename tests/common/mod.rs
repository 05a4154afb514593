#![allow(dead_code)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use pizza_api::config::{AppConfig, DatabaseConfig};
use pizza_api::database::models::{NewRestaurantPizza, Pizza, Restaurant, RestaurantPizzaDetail};
use pizza_api::database::{service, DatabaseManager};
use pizza_api::AppState;
use sqlx::SqlitePool;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// The full router served on a free port against its own SQLite file
pub struct TestServer {
    pub base_url: String,
    pub pool: SqlitePool,
    pub client: reqwest::Client,
    db_path: PathBuf,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        let db_path = std::env::temp_dir().join(format!("pizza_it_{}.db", Uuid::new_v4().simple()));

        let mut config = AppConfig::development();
        config.database = DatabaseConfig {
            url: format!("sqlite://{}", db_path.display()),
            max_connections: 5,
            connection_timeout: 5,
            enable_query_logging: false,
        };
        config.api.enable_request_logging = false;

        let pool = DatabaseManager::connect_and_migrate(&config.database)
            .await
            .context("failed to open test database")?;

        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind test listener")?;

        let app = pizza_api::app(AppState::new(pool.clone()), &config);
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url: format!("http://127.0.0.1:{}", port),
            pool,
            client: reqwest::Client::new(),
            db_path,
            handle,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn restaurant(&self, name: &str, address: &str) -> Result<Restaurant> {
        Ok(service::create_restaurant(&self.pool, name, address).await?)
    }

    pub async fn pizza(&self, name: &str, ingredients: &str) -> Result<Pizza> {
        Ok(service::create_pizza(&self.pool, name, ingredients).await?)
    }

    pub async fn restaurant_pizza(
        &self,
        price: i64,
        pizza_id: i64,
        restaurant_id: i64,
    ) -> Result<RestaurantPizzaDetail> {
        let new = NewRestaurantPizza { price, pizza_id, restaurant_id };
        Ok(service::create_restaurant_pizza(&self.pool, &new).await?)
    }

    pub async fn count(&self, table: &str) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM \"{}\"", table);
        Ok(sqlx::query_scalar(&sql).fetch_one(&self.pool).await?)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
        let _ = std::fs::remove_file(&self.db_path);
    }
}
