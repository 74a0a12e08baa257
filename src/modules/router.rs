use axum::{response::IntoResponse, routing::get, Router};
use serde_json::json;

use super::{auth, menu, order};
use crate::{types::Context, utils::response::ApiResponse};
use std::sync::Arc;

async fn health_check() -> impl IntoResponse {
    ApiResponse::ok(json!({ "status": "ok" })).with_message("Welcome to the food ordering API")
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(health_check))
        .nest("/auth", auth::get_router())
        .nest("/menu", menu::get_router())
        .nest("/orders", order::get_router())
}
