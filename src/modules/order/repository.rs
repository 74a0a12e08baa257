use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{
    types::{BigDecimal, Json},
    FromRow, PgExecutor,
};
use std::{fmt, str::FromStr};
use ulid::Ulid;

use crate::utils::{
    money,
    pagination::{Paginated, Pagination},
};

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderStatus {
    #[serde(rename = "Order Received")]
    OrderReceived,
    #[serde(rename = "Preparing")]
    Preparing,
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    #[serde(rename = "Delivered")]
    Delivered,
    #[serde(rename = "Cancelled")]
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::OrderReceived,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::OrderReceived => "Order Received",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("'{}' is not a valid OrderStatus", s))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub menu_item_id: String,
    pub name: String,
    #[serde(with = "money::as_number")]
    pub price: BigDecimal,
    pub quantity: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DeliveryDetails {
    pub name: String,
    pub address: String,
    pub phone: String,
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderItem>,
    #[serde(with = "money::as_number")]
    pub total_amount: BigDecimal,
    pub delivery_details: DeliveryDetails,
    pub status: OrderStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(FromRow)]
struct OrderRow {
    id: String,
    user_id: String,
    items: Json<Vec<OrderItem>>,
    total_amount: BigDecimal,
    delivery_details: Json<DeliveryDetails>,
    status: String,
    created_at: NaiveDateTime,
    updated_at: Option<NaiveDateTime>,
}

impl TryFrom<OrderRow> for Order {
    type Error = Error;

    fn try_from(row: OrderRow) -> Result<Self> {
        let status = row.status.parse::<OrderStatus>().map_err(|err| {
            tracing::error!("Invalid status stored for order {}: {}", row.id, err);
            Error::UnexpectedError
        })?;

        Ok(Order {
            id: row.id,
            user_id: row.user_id,
            items: row.items.0,
            total_amount: row.total_amount,
            delivery_details: row.delivery_details.0,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub fn is_owner(order: &Order, user_id: &str) -> bool {
    order.user_id == user_id
}

pub struct CreateOrderPayload {
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub total_amount: BigDecimal,
    pub delivery_details: DeliveryDetails,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateOrderPayload) -> Result<Order> {
    sqlx::query_as::<_, OrderRow>(
        "
        INSERT INTO orders (id, user_id, items, total_amount, delivery_details, status)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.user_id)
    .bind(Json(payload.items))
    .bind(payload.total_amount)
    .bind(Json(payload.delivery_details))
    .bind(OrderStatus::OrderReceived.to_string())
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create an order: {}", err);
        Error::UnexpectedError
    })?
    .try_into()
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Order>> {
    sqlx::query_as::<_, OrderRow>("SELECT * FROM orders WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch order by id {}: {}", id, err);
            Error::UnexpectedError
        })?
        .map(Order::try_from)
        .transpose()
}

#[derive(Default)]
pub struct Filters {
    /// Restricts the listing to one customer's orders. Admins list with `None`.
    pub user_id: Option<String>,
    pub status: Option<OrderStatus>,
}

pub async fn find_many<'e, E: PgExecutor<'e> + Copy>(
    e: E,
    pagination: Pagination,
    filters: Filters,
) -> Result<Paginated<Order>> {
    let status = filters.status.map(|status| status.to_string());

    let total = sqlx::query_scalar::<_, i64>(
        "
        SELECT COUNT(*) FROM orders
        WHERE
            ($1::TEXT IS NULL OR user_id = $1)
            AND ($2::TEXT IS NULL OR status = $2)
        ",
    )
    .bind(&filters.user_id)
    .bind(&status)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to count orders: {}", err);
        Error::UnexpectedError
    })?;

    let rows = sqlx::query_as::<_, OrderRow>(
        "
        SELECT * FROM orders
        WHERE
            ($1::TEXT IS NULL OR user_id = $1)
            AND ($2::TEXT IS NULL OR status = $2)
        ORDER BY created_at DESC
        LIMIT $3
        OFFSET $4
        ",
    )
    .bind(&filters.user_id)
    .bind(&status)
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch many orders: {}", err);
        Error::UnexpectedError
    })?;

    let orders = rows
        .into_iter()
        .map(Order::try_from)
        .collect::<Result<Vec<_>>>()?;

    Ok(Paginated::new(
        orders,
        u32::try_from(total).unwrap_or(u32::MAX),
        pagination.page,
        pagination.per_page,
    ))
}

pub async fn update_status<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    status: OrderStatus,
) -> Result<Option<Order>> {
    sqlx::query_as::<_, OrderRow>(
        "
        UPDATE orders SET
            status = $2,
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        ",
    )
    .bind(&id)
    .bind(status.to_string())
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update status of order {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })?
    .map(Order::try_from)
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_names_round_trip_through_display() {
        for status in OrderStatus::ALL {
            assert_eq!(status.to_string().parse::<OrderStatus>(), Ok(status));
        }
        assert!("OUT_FOR_DELIVERY".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn only_delivered_and_cancelled_are_terminal() {
        let terminal: Vec<_> = OrderStatus::ALL
            .into_iter()
            .filter(OrderStatus::is_terminal)
            .collect();
        assert_eq!(terminal, [OrderStatus::Delivered, OrderStatus::Cancelled]);
    }

    #[test]
    fn order_items_use_camel_case_documents() {
        let item: OrderItem = serde_json::from_value(json!({
            "menuItemId": "01J0MENU0000000000000000A1",
            "name": "Jollof Rice",
            "price": 10.5,
            "quantity": 2
        }))
        .unwrap();

        assert_eq!(item.quantity, 2);
        assert_eq!(
            serde_json::to_value(&item).unwrap()["menuItemId"],
            json!("01J0MENU0000000000000000A1")
        );
    }
}
