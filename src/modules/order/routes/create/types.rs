pub mod request {
    use crate::modules::{auth::middleware::Auth, order::repository::DeliveryDetails};
    use serde::Deserialize;
    use serde_json::Value;

    /// Client-side `name` and `price` are accepted by validation but never read.
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Item {
        pub menu_item_id: String,
        pub quantity: i32,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Body {
        pub items: Vec<Item>,
        pub delivery_details: DeliveryDetails,
    }

    pub struct Payload {
        pub auth: Auth,
        pub body: Value,
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
        OrderCreated(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderCreated(order) => ApiResponse::created(order)
                    .with_message("Order placed successfully")
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidPayload(Vec<FieldError>),
        MalformedBody,
        MenuItemNotFound(String),
        MenuItemUnavailable(String),
        InvalidTotal(String),
        FailedToCreateOrder,
    }

    impl From<Error> for ApiError {
        fn from(err: Error) -> Self {
            match err {
                Error::InvalidPayload(details) => ApiError::validation(details),
                Error::MalformedBody => ApiError::BadRequest(String::from("Malformed JSON body")),
                Error::MenuItemNotFound(message) => ApiError::NotFound(message),
                Error::MenuItemUnavailable(message) | Error::InvalidTotal(message) => {
                    ApiError::BadRequest(message)
                }
                Error::FailedToCreateOrder => {
                    ApiError::Internal(String::from("Failed to create order"))
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
