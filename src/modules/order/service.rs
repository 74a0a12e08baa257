use num_bigint::BigInt;
use sqlx::types::BigDecimal;
use thiserror::Error;

use super::repository::OrderItem;
use crate::{modules::menu::repository::MenuItem, utils::money};

/// Largest total the `NUMERIC(12, 2)` column holds, in cents.
const MAX_ORDER_TOTAL_CENTS: i64 = 999_999_999_999;

/// A line as the customer sent it. Client-side names and prices are dropped
/// before this point.
#[derive(Clone, Debug)]
pub struct RequestedItem {
    pub menu_item_id: String,
    pub quantity: i32,
}

#[derive(Clone, Debug)]
pub struct PricedOrder {
    pub items: Vec<OrderItem>,
    pub total_amount: BigDecimal,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("Menu item {0} not found")]
    MenuItemNotFound(String),
    #[error("{0} is currently unavailable")]
    MenuItemUnavailable(String),
    #[error("Order total must be greater than zero")]
    NonPositiveTotal,
    #[error("Order total cannot exceed 9999999999.99")]
    TotalTooLarge,
}

/// Re-prices every line from `catalog` and totals the order, rounded to cents.
pub fn price_items(
    requested: Vec<RequestedItem>,
    catalog: &[MenuItem],
) -> Result<PricedOrder, PricingError> {
    let items = requested
        .into_iter()
        .map(|line| {
            let menu_item = catalog
                .iter()
                .find(|menu_item| menu_item.id == line.menu_item_id)
                .ok_or_else(|| PricingError::MenuItemNotFound(line.menu_item_id.clone()))?;

            if !menu_item.available {
                return Err(PricingError::MenuItemUnavailable(menu_item.name.clone()));
            }

            Ok(OrderItem {
                menu_item_id: menu_item.id.clone(),
                name: menu_item.name.clone(),
                price: menu_item.price.clone(),
                quantity: line.quantity,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let total_amount = money::round_currency(&items.iter().fold(
        BigDecimal::from(0),
        |acc, item| acc + item.price.clone() * BigDecimal::from(item.quantity),
    ));

    if total_amount <= BigDecimal::from(0) {
        return Err(PricingError::NonPositiveTotal);
    }

    if total_amount > BigDecimal::new(BigInt::from(MAX_ORDER_TOTAL_CENTS), 2) {
        return Err(PricingError::TotalTooLarge);
    }

    Ok(PricedOrder {
        items,
        total_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::menu::repository::Category;
    use chrono::Utc;
    use std::str::FromStr;

    fn menu_item(id: &str, name: &str, price: &str, available: bool) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            description: String::from("House special"),
            price: BigDecimal::from_str(price).unwrap(),
            image_url: None,
            category: Category::MainCourse,
            available,
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        }
    }

    fn line(menu_item_id: &str, quantity: i32) -> RequestedItem {
        RequestedItem {
            menu_item_id: menu_item_id.to_string(),
            quantity,
        }
    }

    #[test]
    fn totals_to_exact_cents() {
        let catalog = [
            menu_item("rice", "Jollof Rice", "10", true),
            menu_item("drink", "Chapman", "5", true),
        ];

        let priced = price_items(vec![line("rice", 2), line("drink", 3)], &catalog).unwrap();

        assert_eq!(priced.total_amount.to_string(), "35.00");
        assert_eq!(priced.items.len(), 2);
    }

    #[test]
    fn catalog_price_and_name_win() {
        let catalog = [menu_item("rice", "Jollof Rice", "12.99", true)];

        let priced = price_items(vec![line("rice", 3)], &catalog).unwrap();

        assert_eq!(priced.items[0].price, BigDecimal::from_str("12.99").unwrap());
        assert_eq!(priced.items[0].name, "Jollof Rice");
        assert_eq!(priced.total_amount.to_string(), "38.97");
    }

    #[test]
    fn rejects_unknown_and_unavailable_items() {
        let catalog = [menu_item("soup", "Egusi", "8.50", false)];

        assert_eq!(
            price_items(vec![line("ghost", 1)], &catalog).unwrap_err(),
            PricingError::MenuItemNotFound(String::from("ghost"))
        );
        assert_eq!(
            price_items(vec![line("soup", 1)], &catalog).unwrap_err(),
            PricingError::MenuItemUnavailable(String::from("Egusi"))
        );
    }

    #[test]
    fn rejects_free_orders() {
        let catalog = [menu_item("water", "Tap water", "0", true)];

        assert_eq!(
            price_items(vec![line("water", 4)], &catalog).unwrap_err(),
            PricingError::NonPositiveTotal
        );
    }

    #[test]
    fn rejects_totals_past_the_total_column() {
        let catalog = [menu_item("feast", "Wedding feast", "99999999.99", true)];

        let priced = price_items(vec![line("feast", 100)], &catalog).unwrap();
        assert_eq!(priced.total_amount.to_string(), "9999999999.00");

        assert_eq!(
            price_items(vec![line("feast", 100), line("feast", 1)], &catalog).unwrap_err(),
            PricingError::TotalTooLarge
        );
    }
}
