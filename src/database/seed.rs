use serde::Serialize;
use sqlx::SqlitePool;
use tracing::info;

use crate::database::manager::DatabaseError;
use crate::database::models::NewRestaurantPizza;
use crate::database::service;

const RESTAURANTS: &[(&str, &str)] = &[
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: &[(&str, &str)] = &[
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// Rows inserted by [`seed`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub restaurants: usize,
    pub pizzas: usize,
    pub restaurant_pizzas: usize,
}

/// Insert the sample restaurants and pizzas, pairing each restaurant with the
/// pizza at the same position.
pub async fn seed(pool: &SqlitePool) -> Result<SeedSummary, DatabaseError> {
    let mut summary = SeedSummary::default();

    let mut restaurants = Vec::with_capacity(RESTAURANTS.len());
    for (name, address) in RESTAURANTS {
        restaurants.push(service::create_restaurant(pool, name, address).await?);
        summary.restaurants += 1;
    }

    let mut pizzas = Vec::with_capacity(PIZZAS.len());
    for (name, ingredients) in PIZZAS {
        pizzas.push(service::create_pizza(pool, name, ingredients).await?);
        summary.pizzas += 1;
    }

    for (restaurant, pizza) in restaurants.iter().zip(pizzas.iter()) {
        let new = NewRestaurantPizza {
            price: 1,
            pizza_id: pizza.id,
            restaurant_id: restaurant.id,
        };
        service::create_restaurant_pizza(pool, &new).await?;
        summary.restaurant_pizzas += 1;
    }

    info!(
        restaurants = summary.restaurants,
        pizzas = summary.pizzas,
        restaurant_pizzas = summary.restaurant_pizzas,
        "seeded database"
    );
    Ok(summary)
}
