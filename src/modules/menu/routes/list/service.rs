use super::types::{request, response};
use crate::{
    modules::menu::repository::{self, Category},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let category = payload
        .filters
        .category
        .filter(|category| !category.is_empty())
        .map(|category| category.parse::<Category>())
        .transpose()
        .map_err(|_| response::Error::InvalidCategory)?;

    let available = match payload.filters.available.as_deref() {
        None | Some("") => None,
        Some("true") => Some(true),
        Some("false") => Some(false),
        Some(_) => return Err(response::Error::InvalidAvailability),
    };

    repository::find_many(
        &ctx.db_conn.pool,
        repository::Filters {
            category,
            available,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToFetchMenuItems)
    .map(response::Success::MenuItems)
}
