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
        OrderCancelled(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderCancelled(order) => ApiResponse::ok(order)
                    .with_message("Order cancelled successfully")
                    .into_response(),
            }
        }
    }

    pub enum Error {
        OrderNotFound,
        UserNotOwner(String),
        CannotCancel(String),
        FailedToCancelOrder,
    }

    impl From<Error> for ApiError {
        fn from(err: Error) -> Self {
            match err {
                Error::OrderNotFound => ApiError::NotFound(String::from("Order not found")),
                Error::UserNotOwner(message) => ApiError::Forbidden(message),
                Error::CannotCancel(message) => ApiError::BadRequest(message),
                Error::FailedToCancelOrder => {
                    ApiError::Internal(String::from("Failed to cancel order"))
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
