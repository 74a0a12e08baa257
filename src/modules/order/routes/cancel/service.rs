use super::types::{request, response};
use crate::{
    modules::order::{
        lifecycle::{self, TransitionError},
        repository,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let order = repository::find_by_id(&ctx.db_conn.pool, payload.id.clone())
        .await
        .map_err(|_| response::Error::FailedToCancelOrder)?
        .ok_or(response::Error::OrderNotFound)?;

    let status = lifecycle::check_cancellation(&order, &payload.auth.user).map_err(|err| match err {
        TransitionError::NotOwner => response::Error::UserNotOwner(err.to_string()),
        _ => response::Error::CannotCancel(err.to_string()),
    })?;

    let order = repository::update_status(&ctx.db_conn.pool, payload.id, status)
        .await
        .map_err(|_| response::Error::FailedToCancelOrder)?
        .ok_or(response::Error::OrderNotFound)?;

    tracing::info!("Order {} cancelled by {}", order.id, payload.auth.user.id);

    Ok(response::Success::OrderCancelled(order))
}
