// handlers/restaurants/delete.rs - DELETE /restaurants/:id handler

use axum::extract::{Path, State};

use crate::database::models::Restaurant;
use crate::database::repository::not_found_message;
use crate::database::service;
use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

pub async fn restaurant_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let id = parse_id(&id).ok_or_else(|| ApiError::not_found(not_found_message::<Restaurant>()))?;

    service::delete_restaurant(&state.pool, id).await?;
    Ok(ApiResponse::no_content())
}
