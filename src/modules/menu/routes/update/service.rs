use super::types::{request, response};
use crate::{modules::menu::repository, types::Context, utils::validation};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    validation::validate_menu_item_update(&payload.body)
        .into_result()
        .map_err(response::Error::InvalidPayload)?;

    let body = serde_json::from_value::<request::Body>(payload.body).map_err(|err| {
        tracing::warn!("Failed to deserialize menu item update: {}", err);
        response::Error::MalformedBody
    })?;

    repository::update_by_id(
        &ctx.db_conn.pool,
        payload.id,
        repository::UpdateMenuItemPayload {
            name: body.name.map(|name| name.trim().to_string()),
            description: body.description.map(|description| description.trim().to_string()),
            price: body.price,
            image_url: body.image_url.map(|url| url.trim().to_string()),
            category: body.category,
            available: body.available,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateMenuItem)?
    .ok_or(response::Error::MenuItemNotFound)
    .map(response::Success::MenuItemUpdated)
}
