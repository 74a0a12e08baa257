use super::types::response;
use crate::modules::menu::repository::Category;

pub async fn service() -> response::Response {
    response::Success::Categories(Category::ALL.to_vec())
}
