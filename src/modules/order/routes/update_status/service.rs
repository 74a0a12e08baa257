use super::types::{request, response};
use crate::{
    modules::order::{lifecycle, repository},
    types::Context,
    utils::validation,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    validation::validate_status_update(&payload.body)
        .into_result()
        .map_err(response::Error::InvalidPayload)?;

    let body = serde_json::from_value::<request::Body>(payload.body).map_err(|err| {
        tracing::warn!("Failed to deserialize status update: {}", err);
        response::Error::MalformedBody
    })?;

    let order = repository::find_by_id(&ctx.db_conn.pool, payload.id.clone())
        .await
        .map_err(|_| response::Error::FailedToUpdateOrderStatus)?
        .ok_or(response::Error::OrderNotFound)?;

    lifecycle::check_status_update(order.status, body.status)
        .map_err(|err| response::Error::InvalidStatusTransition(err.to_string()))?;

    let order = repository::update_status(&ctx.db_conn.pool, payload.id, body.status)
        .await
        .map_err(|_| response::Error::FailedToUpdateOrderStatus)?
        .ok_or(response::Error::OrderNotFound)?;

    tracing::info!(
        "Order {} moved to {} by admin {}",
        order.id,
        order.status,
        payload.auth.user.id
    );

    Ok(response::Success::OrderStatusUpdated(order))
}
