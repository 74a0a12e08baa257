pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub id: String,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::{
        modules::order::repository::Order,
        utils::response::{ApiError, ApiResponse},
    };
    use axum::response::IntoResponse;

    pub enum Success {
        Order(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Order(order) => ApiResponse::ok(order).into_response(),
            }
        }
    }

    pub enum Error {
        OrderNotFound,
        UserNotOwner,
        FailedToFetchOrder,
    }

    impl From<Error> for ApiError {
        fn from(err: Error) -> Self {
            match err {
                Error::OrderNotFound => ApiError::NotFound(String::from("Order not found")),
                Error::UserNotOwner => {
                    ApiError::Forbidden(String::from("Not authorized to view this order"))
                }
                Error::FailedToFetchOrder => {
                    ApiError::Internal(String::from("Failed to fetch order"))
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
