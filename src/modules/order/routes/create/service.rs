use super::types::{request, response};
use crate::{
    modules::{
        menu,
        order::{
            repository::{self, DeliveryDetails},
            service::{self as pricing, PricingError, RequestedItem},
        },
    },
    types::Context,
    utils::validation,
};
use itertools::Itertools;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    validation::validate_order_input(&payload.body)
        .into_result()
        .map_err(response::Error::InvalidPayload)?;

    let body = serde_json::from_value::<request::Body>(payload.body).map_err(|err| {
        tracing::warn!("Failed to deserialize order body: {}", err);
        response::Error::MalformedBody
    })?;

    let menu_item_ids = body
        .items
        .iter()
        .map(|item| item.menu_item_id.clone())
        .unique()
        .collect::<Vec<_>>();

    let catalog = menu::repository::find_many_by_ids(&ctx.db_conn.pool, menu_item_ids)
        .await
        .map_err(|_| response::Error::FailedToCreateOrder)?;

    let priced = pricing::price_items(
        body.items
            .into_iter()
            .map(|item| RequestedItem {
                menu_item_id: item.menu_item_id,
                quantity: item.quantity,
            })
            .collect(),
        &catalog,
    )
    .map_err(|err| match err {
        PricingError::MenuItemNotFound(_) => response::Error::MenuItemNotFound(err.to_string()),
        PricingError::MenuItemUnavailable(_) => {
            response::Error::MenuItemUnavailable(err.to_string())
        }
        PricingError::NonPositiveTotal | PricingError::TotalTooLarge => {
            response::Error::InvalidTotal(err.to_string())
        }
    })?;

    let order = repository::create(
        &ctx.db_conn.pool,
        repository::CreateOrderPayload {
            user_id: payload.auth.user.id,
            items: priced.items,
            total_amount: priced.total_amount,
            delivery_details: DeliveryDetails {
                name: body.delivery_details.name.trim().to_string(),
                address: body.delivery_details.address.trim().to_string(),
                phone: body.delivery_details.phone.trim().to_string(),
            },
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateOrder)?;

    tracing::info!(
        "Order {} placed by {} for {}",
        order.id,
        order.user_id,
        order.total_amount
    );

    Ok(response::Success::OrderCreated(order))
}
