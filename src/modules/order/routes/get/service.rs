use super::types::{request, response};
use crate::{
    modules::{order::repository, user},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let order = repository::find_by_id(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(|_| response::Error::FailedToFetchOrder)?
        .ok_or(response::Error::OrderNotFound)?;

    if !user::repository::is_admin(&payload.auth.user)
        && !repository::is_owner(&order, &payload.auth.user.id)
    {
        return Err(response::Error::UserNotOwner);
    }

    Ok(response::Success::Order(order))
}
