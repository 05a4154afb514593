use sqlx::SqlitePool;
use tracing::info;

use crate::database::manager::DatabaseError;

const CREATE_RESTAURANTS: &str = r#"
    CREATE TABLE IF NOT EXISTS restaurants (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        address TEXT NOT NULL
    );
"#;

const CREATE_PIZZAS: &str = r#"
    CREATE TABLE IF NOT EXISTS pizzas (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        ingredients TEXT NOT NULL
    );
"#;

const CREATE_RESTAURANT_PIZZAS: &str = r#"
    CREATE TABLE IF NOT EXISTS restaurant_pizzas (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        price INTEGER NOT NULL CHECK (price BETWEEN 1 AND 30),
        restaurant_id INTEGER NOT NULL REFERENCES restaurants(id) ON DELETE CASCADE,
        pizza_id INTEGER NOT NULL REFERENCES pizzas(id)
    );
"#;

const CREATE_RESTAURANT_PIZZAS_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_restaurant_pizzas_restaurant_id
        ON restaurant_pizzas (restaurant_id);
"#;

/// Create the three tables when missing. Safe to run on every start.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), DatabaseError> {
    let steps = [
        ("restaurants", CREATE_RESTAURANTS),
        ("pizzas", CREATE_PIZZAS),
        ("restaurant_pizzas", CREATE_RESTAURANT_PIZZAS),
        ("idx_restaurant_pizzas_restaurant_id", CREATE_RESTAURANT_PIZZAS_INDEX),
    ];

    for (name, sql) in steps {
        sqlx::query(sql)
            .execute(pool)
            .await
            .map_err(|e| DatabaseError::MigrationError(format!("failed to create {}: {}", name, e)))?;
    }

    info!("database migrations complete");
    Ok(())
}
