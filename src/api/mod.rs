pub mod format;

pub use format::{
    association_view, nested_association_view, pizza_view, restaurant_detail_view, restaurant_view,
    PizzaView, RestaurantDetailView, RestaurantPizzaView, RestaurantView,
};
