use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::info;

use crate::{
    error::AppError,
    models::{MenuItem, Order},
    state::AppState,
};

#[derive(Deserialize)]
pub struct Login {
    username: String,
    password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginOk {
    message: String,
    user_name: String,
    user_id: Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrder {
    user_id: Value,
    items: Vec<Value>,
}

pub async fn welcome_handler() -> &'static str {
    "Welcome to the Canteen App!"
}

pub async fn menu_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MenuItem>>, AppError> {
    Ok(Json(state.menu.get_all().await?))
}

pub async fn menu_item_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<MenuItem>, AppError> {
    let item = state
        .menu
        .get_by_id(id)
        .await?
        .ok_or(AppError::MenuItemNotFound)?;

    Ok(Json(item))
}

pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Login>,
) -> Result<Json<LoginOk>, AppError> {
    let user = state
        .users
        .find_by_credentials(&payload.username, &payload.password)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    Ok(Json(LoginOk {
        message: "Login successful!".to_string(),
        user_name: user.username,
        user_id: user.user_id,
    }))
}

pub async fn place_order_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<PlaceOrder>,
) -> Result<Json<Value>, AppError> {
    let order = state.ledger.append(payload.user_id, payload.items).await?;

    info!(
        "Order placed for user {} at {}",
        order.user_id, order.timestamp
    );

    Ok(Json(json!({ "message": "Order placed successfully!" })))
}

pub async fn order_history_handler(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Order>>, AppError> {
    let orders = state.ledger.query_by_user(&user_id).await?;

    if orders.is_empty() {
        return Err(AppError::NoOrdersForUser);
    }

    Ok(Json(orders))
}
