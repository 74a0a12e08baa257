use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{types::BigDecimal, FromRow, PgExecutor};
use std::{fmt, str::FromStr};
use ulid::Ulid;

use crate::utils::money;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    #[serde(rename = "Appetizers")]
    Appetizers,
    #[serde(rename = "Main Course")]
    MainCourse,
    #[serde(rename = "Desserts")]
    Desserts,
    #[serde(rename = "Beverages")]
    Beverages,
    #[serde(rename = "Salads")]
    Salads,
    #[serde(rename = "Soups")]
    Soups,
    #[serde(rename = "Sides")]
    Sides,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Appetizers,
        Category::MainCourse,
        Category::Desserts,
        Category::Beverages,
        Category::Salads,
        Category::Soups,
        Category::Sides,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Appetizers => "Appetizers",
            Category::MainCourse => "Main Course",
            Category::Desserts => "Desserts",
            Category::Beverages => "Beverages",
            Category::Salads => "Salads",
            Category::Soups => "Soups",
            Category::Sides => "Sides",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("'{}' is not a valid Category", s))
    }
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(with = "money::as_number")]
    pub price: BigDecimal,
    pub image_url: Option<String>,
    pub category: Category,
    pub available: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(FromRow)]
struct MenuItemRow {
    id: String,
    name: String,
    description: String,
    price: BigDecimal,
    image_url: Option<String>,
    category: String,
    available: bool,
    created_at: NaiveDateTime,
    updated_at: Option<NaiveDateTime>,
}

impl TryFrom<MenuItemRow> for MenuItem {
    type Error = Error;

    fn try_from(row: MenuItemRow) -> Result<Self> {
        let category = row.category.parse::<Category>().map_err(|err| {
            tracing::error!("Invalid category stored for menu item {}: {}", row.id, err);
            Error::UnexpectedError
        })?;

        Ok(MenuItem {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            image_url: row.image_url,
            category,
            available: row.available,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn into_menu_items(rows: Vec<MenuItemRow>) -> Result<Vec<MenuItem>> {
    rows.into_iter().map(MenuItem::try_from).collect()
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub struct CreateMenuItemPayload {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub image_url: Option<String>,
    pub category: Category,
    pub available: bool,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateMenuItemPayload) -> Result<MenuItem> {
    sqlx::query_as::<_, MenuItemRow>(
        "
        INSERT INTO menu_items (id, name, description, price, image_url, category, available)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.price)
    .bind(payload.image_url)
    .bind(payload.category.to_string())
    .bind(payload.available)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a menu item: {}", err);
        Error::UnexpectedError
    })?
    .try_into()
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<MenuItem>> {
    sqlx::query_as::<_, MenuItemRow>("SELECT * FROM menu_items WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch menu item by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })?
        .map(MenuItem::try_from)
        .transpose()
}

pub async fn find_many_by_ids<'e, E: PgExecutor<'e>>(
    e: E,
    ids: Vec<String>,
) -> Result<Vec<MenuItem>> {
    sqlx::query_as::<_, MenuItemRow>("SELECT * FROM menu_items WHERE id = ANY($1)")
        .bind(ids)
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch menu items by ids: {}", err);
            Error::UnexpectedError
        })
        .and_then(into_menu_items)
}

#[derive(Default)]
pub struct Filters {
    pub category: Option<Category>,
    pub available: Option<bool>,
}

pub async fn find_many<'e, E: PgExecutor<'e>>(e: E, filters: Filters) -> Result<Vec<MenuItem>> {
    sqlx::query_as::<_, MenuItemRow>(
        "
        SELECT * FROM menu_items
        WHERE
            ($1::TEXT IS NULL OR category = $1)
            AND ($2::BOOLEAN IS NULL OR available = $2)
        ORDER BY category, name
        ",
    )
    .bind(filters.category.map(|category| category.to_string()))
    .bind(filters.available)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch many menu items: {}", err);
        Error::UnexpectedError
    })
    .and_then(into_menu_items)
}

#[derive(Default)]
pub struct UpdateMenuItemPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<BigDecimal>,
    pub image_url: Option<String>,
    pub category: Option<Category>,
    pub available: Option<bool>,
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateMenuItemPayload,
) -> Result<Option<MenuItem>> {
    sqlx::query_as::<_, MenuItemRow>(
        "
        UPDATE menu_items SET
            name = COALESCE($2, name),
            description = COALESCE($3, description),
            price = COALESCE($4, price),
            image_url = COALESCE($5, image_url),
            category = COALESCE($6, category),
            available = COALESCE($7, available),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        ",
    )
    .bind(&id)
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.price)
    .bind(payload.image_url)
    .bind(payload.category.map(|category| category.to_string()))
    .bind(payload.available)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update menu item {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })?
    .map(MenuItem::try_from)
    .transpose()
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<bool> {
    sqlx::query("DELETE FROM menu_items WHERE id = $1")
        .bind(&id)
        .execute(e)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete menu item {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names_round_trip_through_display() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
        assert!("main course".parse::<Category>().is_err());
    }
}
