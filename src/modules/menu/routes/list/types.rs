pub mod request {
    use serde::Deserialize;

    /// Raw query values; parsed in the service so bad values get the JSON envelope.
    #[derive(Deserialize)]
    pub struct Filters {
        pub category: Option<String>,
        pub available: Option<String>,
    }

    pub struct Payload {
        pub filters: Filters,
    }
}

pub mod response {
    use crate::{
        modules::menu::repository::MenuItem,
        utils::{response::ApiError, response::ApiResponse, validation},
    };
    use axum::response::IntoResponse;

    pub enum Success {
        MenuItems(Vec<MenuItem>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuItems(items) => ApiResponse::ok(items).into_response(),
            }
        }
    }

    pub enum Error {
        InvalidCategory,
        InvalidAvailability,
        FailedToFetchMenuItems,
    }

    impl From<Error> for ApiError {
        fn from(err: Error) -> Self {
            match err {
                Error::InvalidCategory => {
                    ApiError::BadRequest(validation::invalid_category_message())
                }
                Error::InvalidAvailability => {
                    ApiError::BadRequest(String::from("Available must be either true or false"))
                }
                Error::FailedToFetchMenuItems => {
                    ApiError::Internal(String::from("Failed to fetch menu items"))
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
