// handlers/restaurant_pizzas/create.rs - POST /restaurant_pizzas handler

use axum::extract::{rejection::JsonRejection, State};
use axum::Json;
use serde::Deserialize;

use crate::api::format::{nested_association_view, RestaurantPizzaView};
use crate::database::models::NewRestaurantPizza;
use crate::database::service;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// Request body. Every field is optional here so that a missing field is
/// reported as a validation failure rather than a deserialization error.
#[derive(Debug, Default, Deserialize)]
pub struct CreateRestaurantPizza {
    pub price: Option<i64>,
    pub pizza_id: Option<i64>,
    pub restaurant_id: Option<i64>,
}

impl TryFrom<CreateRestaurantPizza> for NewRestaurantPizza {
    type Error = ApiError;

    fn try_from(body: CreateRestaurantPizza) -> Result<Self, Self::Error> {
        match (body.price, body.pizza_id, body.restaurant_id) {
            (Some(price), Some(pizza_id), Some(restaurant_id)) => Ok(NewRestaurantPizza {
                price,
                pizza_id,
                restaurant_id,
            }),
            _ => Err(ApiError::validation_failed()),
        }
    }
}

pub async fn restaurant_pizza_create(
    State(state): State<AppState>,
    payload: Result<Json<CreateRestaurantPizza>, JsonRejection>,
) -> ApiResult<RestaurantPizzaView> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!("Rejected restaurant_pizza body: {}", rejection);
        ApiError::validation_failed()
    })?;
    let new = NewRestaurantPizza::try_from(body)?;

    let detail = service::create_restaurant_pizza(&state.pool, &new).await?;
    Ok(ApiResponse::created(nested_association_view(&detail)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_are_validation_failures() {
        let body = CreateRestaurantPizza { price: Some(5), pizza_id: None, restaurant_id: Some(1) };
        let err = NewRestaurantPizza::try_from(body).unwrap_err();
        assert!(matches!(err, ApiError::ValidationFailed(_)));
        assert!(NewRestaurantPizza::try_from(CreateRestaurantPizza::default()).is_err());
    }

    #[test]
    fn complete_body_converts() {
        let body = CreateRestaurantPizza { price: Some(5), pizza_id: Some(2), restaurant_id: Some(3) };
        let new = NewRestaurantPizza::try_from(body).unwrap();
        assert_eq!(new, NewRestaurantPizza { price: 5, pizza_id: 2, restaurant_id: 3 });
    }
}
