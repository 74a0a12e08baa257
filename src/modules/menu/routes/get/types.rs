pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::{
        modules::menu::repository::MenuItem,
        utils::response::{ApiError, ApiResponse},
    };
    use axum::response::IntoResponse;

    pub enum Success {
        MenuItem(MenuItem),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuItem(item) => ApiResponse::ok(item).into_response(),
            }
        }
    }

    pub enum Error {
        MenuItemNotFound,
        FailedToFetchMenuItem,
    }

    impl From<Error> for ApiError {
        fn from(err: Error) -> Self {
            match err {
                Error::MenuItemNotFound => ApiError::NotFound(String::from("Menu item not found")),
                Error::FailedToFetchMenuItem => {
                    ApiError::Internal(String::from("Failed to fetch menu item"))
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
