pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::utils::response::{ApiError, ApiResponse};
    use axum::response::IntoResponse;
    use serde_json::json;

    pub enum Success {
        MenuItemDeleted(String),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuItemDeleted(id) => ApiResponse::ok(json!({ "id": id }))
                    .with_message("Menu item deleted successfully")
                    .into_response(),
            }
        }
    }

    pub enum Error {
        MenuItemNotFound,
        FailedToDeleteMenuItem,
    }

    impl From<Error> for ApiError {
        fn from(err: Error) -> Self {
            match err {
                Error::MenuItemNotFound => ApiError::NotFound(String::from("Menu item not found")),
                Error::FailedToDeleteMenuItem => {
                    ApiError::Internal(String::from("Failed to delete menu item"))
                }
            }
        }
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            ApiError::from(self).into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
