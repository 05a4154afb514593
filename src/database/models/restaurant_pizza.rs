use std::ops::RangeInclusive;

use sqlx::FromRow;

use super::{Entity, Pizza, Restaurant};
use crate::database::manager::DatabaseError;

/// Prices a restaurant may charge for a pizza
pub const PRICE_RANGE: RangeInclusive<i64> = 1..=30;

/// Price a restaurant charges for one pizza
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct RestaurantPizza {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

impl Entity for RestaurantPizza {
    const TABLE: &'static str = "restaurant_pizzas";
    const LABEL: &'static str = "RestaurantPizza";
}

/// Fields required to insert a RestaurantPizza
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRestaurantPizza {
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

impl NewRestaurantPizza {
    pub fn validate(&self) -> Result<(), DatabaseError> {
        if !PRICE_RANGE.contains(&self.price) {
            return Err(DatabaseError::Validation(format!(
                "price must be between {} and {}, got {}",
                PRICE_RANGE.start(),
                PRICE_RANGE.end(),
                self.price
            )));
        }
        Ok(())
    }
}

/// A RestaurantPizza joined with the rows it points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantPizzaDetail {
    pub restaurant_pizza: RestaurantPizza,
    pub pizza: Pizza,
    pub restaurant: Restaurant,
}

/// Flat row produced by the association join (see `database::service`)
#[derive(Debug, FromRow)]
pub(crate) struct RestaurantPizzaJoinRow {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza_name: String,
    pub pizza_ingredients: String,
    pub restaurant_name: String,
    pub restaurant_address: String,
}

impl From<RestaurantPizzaJoinRow> for RestaurantPizzaDetail {
    fn from(row: RestaurantPizzaJoinRow) -> Self {
        Self {
            pizza: Pizza {
                id: row.pizza_id,
                name: row.pizza_name,
                ingredients: row.pizza_ingredients,
            },
            restaurant: Restaurant {
                id: row.restaurant_id,
                name: row.restaurant_name,
                address: row.restaurant_address,
            },
            restaurant_pizza: RestaurantPizza {
                id: row.id,
                price: row.price,
                pizza_id: row.pizza_id,
                restaurant_id: row.restaurant_id,
            },
        }
    }
}
