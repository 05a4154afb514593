// handlers/restaurants/list.rs - GET /restaurants handler

use axum::extract::State;

use crate::api::format::{restaurant_view, RestaurantView};
use crate::database::models::Restaurant;
use crate::database::Repository;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

pub async fn restaurant_list(State(state): State<AppState>) -> ApiResult<Vec<RestaurantView>> {
    let restaurants = Repository::<Restaurant>::new(&state.pool).select_all().await?;
    Ok(ApiResponse::success(restaurants.iter().map(restaurant_view).collect()))
}
