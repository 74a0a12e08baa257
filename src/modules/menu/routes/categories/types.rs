pub mod response {
    use crate::{modules::menu::repository::Category, utils::response::ApiResponse};
    use axum::response::IntoResponse;

    pub enum Success {
        Categories(Vec<Category>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Categories(categories) => ApiResponse::ok(categories).into_response(),
            }
        }
    }

    pub type Response = Success;
}
