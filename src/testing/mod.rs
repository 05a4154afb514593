use std::path::PathBuf;

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::config::DatabaseConfig;
use crate::database::models::{NewRestaurantPizza, Pizza, Restaurant, RestaurantPizzaDetail};
use crate::database::{service, DatabaseManager};

/// A migrated SQLite file unique to one test, removed on drop
pub struct TestDatabase {
    pub pool: SqlitePool,
    path: PathBuf,
}

impl TestDatabase {
    pub async fn new() -> anyhow::Result<Self> {
        let path = std::env::temp_dir().join(format!("pizza_test_{}.db", Uuid::new_v4().simple()));
        let config = DatabaseConfig {
            url: format!("sqlite://{}", path.display()),
            max_connections: 2,
            connection_timeout: 5,
            enable_query_logging: false,
        };
        let pool = DatabaseManager::connect_and_migrate(&config)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to open test database: {}", e))?;
        Ok(Self { pool, path })
    }

    pub async fn insert_restaurant(&self, name: &str, address: &str) -> Restaurant {
        service::create_restaurant(&self.pool, name, address)
            .await
            .expect("insert restaurant")
    }

    pub async fn insert_pizza(&self, name: &str, ingredients: &str) -> Pizza {
        service::create_pizza(&self.pool, name, ingredients)
            .await
            .expect("insert pizza")
    }

    pub async fn insert_restaurant_pizza(
        &self,
        price: i64,
        pizza_id: i64,
        restaurant_id: i64,
    ) -> RestaurantPizzaDetail {
        let new = NewRestaurantPizza { price, pizza_id, restaurant_id };
        service::create_restaurant_pizza(&self.pool, &new)
            .await
            .expect("insert restaurant pizza")
    }
}

impl Drop for TestDatabase {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
