pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

pub use pizza::Pizza;
pub use restaurant::Restaurant;
pub use restaurant_pizza::{NewRestaurantPizza, RestaurantPizza, RestaurantPizzaDetail, PRICE_RANGE};

/// A row type backed by its own table
pub trait Entity {
    /// Table the rows live in
    const TABLE: &'static str;
    /// Human name used in error messages ("Restaurant not found")
    const LABEL: &'static str;
}
