use super::types::{request, response};
use crate::{modules::menu::repository, types::Context, utils::validation};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    validation::validate_menu_item_input(&payload.body)
        .into_result()
        .map_err(response::Error::InvalidPayload)?;

    let body = serde_json::from_value::<request::Body>(payload.body).map_err(|err| {
        tracing::warn!("Failed to deserialize menu item body: {}", err);
        response::Error::MalformedBody
    })?;

    let item = repository::create(
        &ctx.db_conn.pool,
        repository::CreateMenuItemPayload {
            name: body.name.trim().to_string(),
            description: body.description.trim().to_string(),
            price: body.price,
            image_url: body.image_url.map(|url| url.trim().to_string()),
            category: body.category,
            available: body.available.unwrap_or(true),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateMenuItem)?;

    tracing::info!("Created menu item {} ({})", item.id, item.name);

    Ok(response::Success::MenuItemCreated(item))
}
