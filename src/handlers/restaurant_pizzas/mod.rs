pub mod create;

pub use create::restaurant_pizza_create;
