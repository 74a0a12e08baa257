pub mod request {
    use crate::{modules::auth::middleware::Auth, utils::pagination::Pagination};
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Filters {
        pub status: Option<String>,
    }

    pub struct Payload {
        pub auth: Auth,
        pub pagination: Pagination,
        pub filters: Filters,
    }
}

pub mod response {
    use crate::{
        modules::order::repository::Order,
        utils::{
            pagination::Paginated,
            response::{ApiError, ApiResponse},
            validation,
        },
    };
    use axum::response::IntoResponse;

    pub enum Success {
        Orders(Paginated<Order>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Orders(orders) => ApiResponse::ok(orders).into_response(),
            }
        }
    }

    pub enum Error {
        InvalidStatus,
        FailedToFetchOrders,
    }

    impl From<Error> for ApiError {
        fn from(err: Error) -> Self {
            match err {
                Error::InvalidStatus => ApiError::BadRequest(validation::invalid_status_message()),
                Error::FailedToFetchOrders => {
                    ApiError::Internal(String::from("Failed to fetch orders"))
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
