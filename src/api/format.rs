//! JSON views of the stored rows.
//!
//! Shallow views carry only an entity's own columns. The nested association
//! view additionally embeds the shallow views of its pizza and restaurant.

use serde::Serialize;

use crate::database::models::{Pizza, Restaurant, RestaurantPizza, RestaurantPizzaDetail};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestaurantView {
    pub id: i64,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PizzaView {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestaurantPizzaView {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pizza: Option<PizzaView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<RestaurantView>,
}

/// `GET /restaurants/:id` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestaurantDetailView {
    #[serde(flatten)]
    pub restaurant: RestaurantView,
    pub restaurant_pizzas: Vec<RestaurantPizzaView>,
}

pub fn restaurant_view(r: &Restaurant) -> RestaurantView {
    RestaurantView {
        id: r.id,
        name: r.name.clone(),
        address: r.address.clone(),
    }
}

pub fn pizza_view(p: &Pizza) -> PizzaView {
    PizzaView {
        id: p.id,
        name: p.name.clone(),
        ingredients: p.ingredients.clone(),
    }
}

/// Shallow when `related` is `None`; otherwise embeds the pizza and restaurant
pub fn association_view(
    rp: &RestaurantPizza,
    related: Option<(&Pizza, &Restaurant)>,
) -> RestaurantPizzaView {
    let (pizza, restaurant) = match related {
        Some((p, r)) => (Some(pizza_view(p)), Some(restaurant_view(r))),
        None => (None, None),
    };

    RestaurantPizzaView {
        id: rp.id,
        price: rp.price,
        pizza_id: rp.pizza_id,
        restaurant_id: rp.restaurant_id,
        pizza,
        restaurant,
    }
}

pub fn nested_association_view(detail: &RestaurantPizzaDetail) -> RestaurantPizzaView {
    association_view(
        &detail.restaurant_pizza,
        Some((&detail.pizza, &detail.restaurant)),
    )
}

pub fn restaurant_detail_view(
    r: &Restaurant,
    restaurant_pizzas: &[RestaurantPizzaDetail],
) -> RestaurantDetailView {
    RestaurantDetailView {
        restaurant: restaurant_view(r),
        restaurant_pizzas: restaurant_pizzas.iter().map(nested_association_view).collect(),
    }
}
