use super::types::{request, response};
use crate::{modules::menu::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let deleted = repository::delete_by_id(&ctx.db_conn.pool, payload.id.clone())
        .await
        .map_err(|_| response::Error::FailedToDeleteMenuItem)?;

    if !deleted {
        return Err(response::Error::MenuItemNotFound);
    }

    tracing::info!("Deleted menu item {}", payload.id);

    Ok(response::Success::MenuItemDeleted(payload.id))
}
