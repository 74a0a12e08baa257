use super::types::{request, response};
use crate::{
    modules::{
        order::repository::{self, OrderStatus},
        user,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let status = payload
        .filters
        .status
        .filter(|status| !status.is_empty())
        .map(|status| status.parse::<OrderStatus>())
        .transpose()
        .map_err(|_| response::Error::InvalidStatus)?;

    let user_id = match user::repository::is_admin(&payload.auth.user) {
        true => None,
        false => Some(payload.auth.user.id),
    };

    repository::find_many(
        &ctx.db_conn.pool,
        payload.pagination,
        repository::Filters { user_id, status },
    )
    .await
    .map_err(|_| response::Error::FailedToFetchOrders)
    .map(response::Success::Orders)
}
