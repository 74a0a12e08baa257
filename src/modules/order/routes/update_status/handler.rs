use super::{service::service, types::request};
use crate::{modules::auth::middleware::AdminAuth, types::Context, utils::response::JsonBody};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    auth: AdminAuth,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> impl IntoResponse {
    service(ctx, request::Payload { id, body, auth }).await
}
