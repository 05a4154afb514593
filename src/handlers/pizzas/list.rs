// handlers/pizzas/list.rs - GET /pizzas handler

use axum::extract::State;

use crate::api::format::{pizza_view, PizzaView};
use crate::database::models::Pizza;
use crate::database::Repository;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

pub async fn pizza_list(State(state): State<AppState>) -> ApiResult<Vec<PizzaView>> {
    let pizzas = Repository::<Pizza>::new(&state.pool).select_all().await?;
    Ok(ApiResponse::success(pizzas.iter().map(pizza_view).collect()))
}
