pub mod request {
    use crate::modules::{auth::middleware::AdminAuth, order::repository::OrderStatus};
    use serde::Deserialize;
    use serde_json::Value;

    #[derive(Deserialize)]
    pub struct Body {
        pub status: OrderStatus,
    }

    pub struct Payload {
        pub id: String,
        pub body: Value,
        pub auth: AdminAuth,
    }
}

pub mod response {
    use crate::{
        modules::order::repository::Order,
        utils::{
            response::{ApiError, ApiResponse},
            validation::FieldError,
        },
    };
    use axum::response::IntoResponse;

    pub enum Success {
        OrderStatusUpdated(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderStatusUpdated(order) => ApiResponse::ok(order)
                    .with_message("Order status updated successfully")
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidPayload(Vec<FieldError>),
        MalformedBody,
        OrderNotFound,
        InvalidStatusTransition(String),
        FailedToUpdateOrderStatus,
    }

    impl From<Error> for ApiError {
        fn from(err: Error) -> Self {
            match err {
                Error::InvalidPayload(details) => ApiError::validation(details),
                Error::MalformedBody => ApiError::BadRequest(String::from("Malformed JSON body")),
                Error::OrderNotFound => ApiError::NotFound(String::from("Order not found")),
                Error::InvalidStatusTransition(message) => ApiError::BadRequest(message),
                Error::FailedToUpdateOrderStatus => {
                    ApiError::Internal(String::from("Failed to update order status"))
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
