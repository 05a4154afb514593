use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::database::manager::DatabaseError;
use crate::database::models::restaurant_pizza::RestaurantPizzaJoinRow;
use crate::database::models::{NewRestaurantPizza, Pizza, Restaurant, RestaurantPizzaDetail};
use crate::database::repository::{not_found_message, Repository};

const SELECT_RESTAURANT_PIZZA_DETAIL: &str = r#"
    SELECT rp.id, rp.price, rp.pizza_id, rp.restaurant_id,
           p.name AS pizza_name, p.ingredients AS pizza_ingredients,
           r.name AS restaurant_name, r.address AS restaurant_address
    FROM restaurant_pizzas rp
    JOIN pizzas p ON p.id = rp.pizza_id
    JOIN restaurants r ON r.id = rp.restaurant_id
"#;

pub async fn create_restaurant(
    pool: &SqlitePool,
    name: &str,
    address: &str,
) -> Result<Restaurant, DatabaseError> {
    let id = sqlx::query("INSERT INTO restaurants (name, address) VALUES (?, ?)")
        .bind(name)
        .bind(address)
        .execute(pool)
        .await?
        .last_insert_rowid();

    Ok(Restaurant {
        id,
        name: name.to_string(),
        address: address.to_string(),
    })
}

pub async fn create_pizza(
    pool: &SqlitePool,
    name: &str,
    ingredients: &str,
) -> Result<Pizza, DatabaseError> {
    let id = sqlx::query("INSERT INTO pizzas (name, ingredients) VALUES (?, ?)")
        .bind(name)
        .bind(ingredients)
        .execute(pool)
        .await?
        .last_insert_rowid();

    Ok(Pizza {
        id,
        name: name.to_string(),
        ingredients: ingredients.to_string(),
    })
}

/// Associations owned by a restaurant, each joined with its pizza and restaurant
pub async fn restaurant_pizzas_for_restaurant(
    pool: &SqlitePool,
    restaurant_id: i64,
) -> Result<Vec<RestaurantPizzaDetail>, DatabaseError> {
    let sql = format!("{} WHERE rp.restaurant_id = ? ORDER BY rp.id", SELECT_RESTAURANT_PIZZA_DETAIL);
    let rows = sqlx::query_as::<_, RestaurantPizzaJoinRow>(&sql)
        .bind(restaurant_id)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(RestaurantPizzaDetail::from).collect())
}

/// A restaurant together with its joined associations, or NotFound
pub async fn find_restaurant_detail(
    pool: &SqlitePool,
    id: i64,
) -> Result<(Restaurant, Vec<RestaurantPizzaDetail>), DatabaseError> {
    let restaurant = Repository::<Restaurant>::new(pool).select_404(id).await?;
    let restaurant_pizzas = restaurant_pizzas_for_restaurant(pool, id).await?;
    Ok((restaurant, restaurant_pizzas))
}

/// Delete a restaurant and every association it owns in one transaction.
/// Returns the number of association rows removed.
pub async fn delete_restaurant(pool: &SqlitePool, id: i64) -> Result<u64, DatabaseError> {
    let mut tx = pool.begin().await?;

    // Write before any read: a deferred transaction that reads first cannot
    // upgrade to a write lock while another connection writes (SQLITE_BUSY).
    // The FK cascades too; deleting explicitly keeps the count and does not
    // depend on the connection having foreign keys switched on.
    let removed = sqlx::query("DELETE FROM restaurant_pizzas WHERE restaurant_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let deleted = sqlx::query("DELETE FROM restaurants WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    if deleted == 0 {
        // Dropping the transaction rolls back
        return Err(DatabaseError::NotFound(not_found_message::<Restaurant>()));
    }

    tx.commit().await?;

    info!(restaurant_id = id, restaurant_pizzas = removed, "deleted restaurant");
    Ok(removed)
}

/// Validate and insert an association, returning it joined with its pizza and
/// restaurant. Any failure leaves the database untouched.
pub async fn create_restaurant_pizza(
    pool: &SqlitePool,
    new: &NewRestaurantPizza,
) -> Result<RestaurantPizzaDetail, DatabaseError> {
    new.validate()?;

    let mut tx = pool.begin().await?;

    let id = sqlx::query("INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id) VALUES (?, ?, ?)")
        .bind(new.price)
        .bind(new.pizza_id)
        .bind(new.restaurant_id)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

    let sql = format!("{} WHERE rp.id = ?", SELECT_RESTAURANT_PIZZA_DETAIL);
    let row = sqlx::query_as::<_, RestaurantPizzaJoinRow>(&sql)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

    // A missing join row means one of the referenced rows does not exist
    let Some(row) = row else {
        return Err(DatabaseError::ConstraintViolation(format!(
            "restaurant {} or pizza {} does not exist",
            new.restaurant_id, new.pizza_id
        )));
    };

    tx.commit().await?;

    debug!(restaurant_pizza_id = id, "created restaurant pizza");
    Ok(row.into())
}

/// Remove every row from all three tables and restart their id sequences
pub async fn reset(pool: &SqlitePool) -> Result<(), DatabaseError> {
    let mut tx = pool.begin().await?;
    for table in ["restaurant_pizzas", "restaurants", "pizzas"] {
        sqlx::query(&format!("DELETE FROM \"{}\"", table))
            .execute(&mut *tx)
            .await?;
    }
    sqlx::query("DELETE FROM sqlite_sequence WHERE name IN ('restaurant_pizzas', 'restaurants', 'pizzas')")
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(())
}
