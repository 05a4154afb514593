// handlers/restaurants/show.rs - GET /restaurants/:id handler

use axum::extract::{Path, State};

use crate::api::format::{restaurant_detail_view, RestaurantDetailView};
use crate::database::models::Restaurant;
use crate::database::repository::not_found_message;
use crate::database::service;
use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

pub async fn restaurant_show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<RestaurantDetailView> {
    let id = parse_id(&id).ok_or_else(|| ApiError::not_found(not_found_message::<Restaurant>()))?;

    let (restaurant, restaurant_pizzas) = service::find_restaurant_detail(&state.pool, id).await?;
    Ok(ApiResponse::success(restaurant_detail_view(&restaurant, &restaurant_pizzas)))
}
